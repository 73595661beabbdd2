/// Source representation and tracking of locations in source code.
use std::ops::Range;

pub mod buffer;
pub mod file;
pub mod location;
pub mod origin;
pub mod registry;
pub mod string;

// re-exports for convenience
pub use buffer::BufferSource;
pub use file::FileSource;
pub use location::{HasSourceLocation, Location, Position};
pub use origin::{HasOrigin, Origin};
pub use registry::Registry;
pub use string::StringSource;

/// A `Source` connects the textual information, the code, to the meta
/// information needed for diagnostics.
///
/// Sources are read once and added to a `Registry`, which in turn hands out
/// the `SourceId` used throughout the frontend.
#[derive(Debug, Clone)]
pub struct Source {
    pub id: SourceId,
    /// The literal source code
    pub code: String,
}

impl Source {
    pub fn new<S: Into<String>>(id: SourceId, code: S) -> Self {
        Self {
            id,
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SourceId(pub(crate) usize);

impl SourceId {
    /// Create a source id for test purposes
    pub fn synthetic() -> Self {
        SourceId(0)
    }

    pub fn location<S: Into<Span>, P: Into<Position>>(&self, span: S, position: P) -> Location {
        Location::new(*self, span, position)
    }
}

impl From<usize> for SourceId {
    fn from(n: usize) -> SourceId {
        SourceId(n)
    }
}

/// A `Span` identifies a part of the input in the source text.
///
/// The diagnostic system uses that to print error messages which
/// show the part of the code that had problems.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Span(Range<usize>);

impl Span {
    /// Returns the offset in the source where this span starts
    #[inline]
    pub fn start(&self) -> usize {
        self.0.start
    }

    /// Returns the offset in the source one past where this span ends
    #[inline]
    pub fn end(&self) -> usize {
        self.0.end
    }
}

impl From<Range<usize>> for Span {
    fn from(n: Range<usize>) -> Self {
        Span(n)
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Range<usize> {
        s.0
    }
}

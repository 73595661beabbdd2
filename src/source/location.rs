use super::SourceId;
use super::Span;

/// A position in the source text as the user sees it.
///
/// Both `line` and `col` are zero based; `line` advances on `\n` and
/// `col` resets to 0 right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, col): (usize, usize)) -> Self {
        Self::new(line, col)
    }
}

/// A location denotes a specific piece of source text in some source.
///
/// It combines the source, the byte span of the text and the line/column
/// position where it starts. Locations are tracked through the whole
/// frontend to allow good source mapping back to the original text.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: SourceId,
    pub span: Span,
    pub position: Position,
}

impl Location {
    pub fn new<S: Into<Span>, P: Into<Position>>(id: SourceId, span: S, position: P) -> Self {
        Self {
            id,
            span: span.into(),
            position: position.into(),
        }
    }

    /// Create a location that doesn't stem from any real source
    pub fn synthetic() -> Self {
        Self::new(SourceId::synthetic(), 0..0, (0, 0))
    }

    /// The location that covers everything from the start of `self`
    /// up to the end of `other`.
    pub fn to(&self, other: &Location) -> Location {
        Location::new(
            self.id,
            self.span.start()..other.span.end(),
            self.position,
        )
    }
}

/// This trait is implemented by every type that tracks locations.
///
/// Examples of this are `Token`, `Datum` and the various expressions.
pub trait HasSourceLocation {
    /// Return `Location` information for this value
    fn source_location(&self) -> &Location;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_to_covers_both() {
        let id = SourceId::synthetic();
        let open = Location::new(id, 0..1, (0, 0));
        let close = Location::new(id, 9..10, (1, 4));

        let combined = open.to(&close);
        assert_eq!(combined.span, Span::from(0..10));
        assert_eq!(combined.position, Position::new(0, 0));
    }
}

use std::fmt::{self, Formatter};
use std::path::PathBuf;

/// Where a source came from.
///
/// The origin shows up as the file name in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Buffer(String),
    File(PathBuf),
    Synthetic,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Buffer(name) => write!(f, "{}", name),
            Origin::File(path) => write!(f, "{}", path.display()),
            Origin::Synthetic => write!(f, "<synthetic>"),
        }
    }
}

/// This trait is implemented by every type that can act as an input
/// to the `Registry`.
pub trait HasOrigin {
    fn origin(&self) -> Origin;
}

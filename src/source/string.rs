use super::{HasOrigin, Origin};
use std::io::{Cursor, Read};

/// An anonymous in-memory source.
#[derive(Clone, Debug)]
pub struct StringSource {
    content: Cursor<String>,
}

impl StringSource {
    pub fn new<C: Into<String>>(content: C) -> Self {
        Self {
            content: Cursor::new(content.into()),
        }
    }
}

impl From<&str> for StringSource {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl HasOrigin for StringSource {
    fn origin(&self) -> Origin {
        Origin::Synthetic
    }
}

impl Read for StringSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.content.read(buf)
    }
}

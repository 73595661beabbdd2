use super::{HasOrigin, Origin};
use std::io::{Cursor, Read};

/// A named in-memory source, used by tests and the stdin harnesses.
#[derive(Clone, Debug)]
pub struct BufferSource {
    content: Cursor<String>,
    name: String,
}

impl BufferSource {
    pub fn new<C: Into<String>, L: Into<String>>(content: C, label: L) -> Self {
        Self {
            content: Cursor::new(content.into()),
            name: label.into(),
        }
    }
}

impl HasOrigin for BufferSource {
    fn origin(&self) -> Origin {
        Origin::Buffer(self.name.clone())
    }
}

impl Read for BufferSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.content.read(buf)
    }
}

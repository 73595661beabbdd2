use super::{HasOrigin, Origin, Source, SourceId};
use codespan_reporting::files;
use codespan_reporting::files::Files;
use std::io::Read;

/// The `Registry` owns the code of every source the frontend has seen.
///
/// Adding a source hands out a `Source` with a fresh `SourceId`; the
/// registry keeps the code around so diagnostics can render excerpts.
#[derive(Debug)]
pub struct Registry {
    inner: files::SimpleFiles<Origin, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            inner: files::SimpleFiles::new(),
        }
    }

    pub fn add<T: HasOrigin + Read>(&mut self, source: &mut T) -> std::io::Result<Source> {
        let mut code = String::new();
        source.read_to_string(&mut code)?;
        let handle = self.inner.add(source.origin(), code.clone());

        Ok(Source::new(SourceId(handle), code))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> files::Files<'a> for Registry {
    type FileId = SourceId;
    type Name = Origin;
    type Source = &'a str;

    fn name(&'a self, id: Self::FileId) -> Result<Self::Name, files::Error> {
        self.inner.name(id.0)
    }

    fn source(&'a self, id: Self::FileId) -> Result<Self::Source, files::Error> {
        self.inner.source(id.0)
    }

    fn line_index(&'a self, id: Self::FileId, byte_index: usize) -> Result<usize, files::Error> {
        self.inner.line_index(id.0, byte_index)
    }

    fn line_range(
        &'a self,
        id: Self::FileId,
        line_index: usize,
    ) -> Result<std::ops::Range<usize>, files::Error> {
        self.inner.line_range(id.0, line_index)
    }
}

//! Text view over a resolved stream

use crate::error::{ResolveError, Result};
use crate::resolver::BufferedStream;
use std::io::{BufRead, Read};

/// A resolved stream read as UTF-8 text
///
/// Still implements [`Read`] and [`BufRead`], so it can be handed to anything
/// that wants a plain reader.
pub struct TextReader {
    path: String,
    inner: BufferedStream,
}

impl TextReader {
    pub(crate) fn new(path: &str, inner: BufferedStream) -> Self {
        Self {
            path: path.to_string(),
            inner,
        }
    }

    /// The path this reader was resolved from
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read everything that is left and decode it
    pub fn read_all(mut self) -> Result<String> {
        let mut bytes = Vec::new();
        self.inner
            .read_to_end(&mut bytes)
            .map_err(|source| ResolveError::Io {
                path: self.path.clone(),
                source,
            })?;
        String::from_utf8(bytes).map_err(|source| ResolveError::Decode {
            path: self.path,
            source,
        })
    }

    /// Iterate over the remaining lines, without line terminators
    pub fn lines(self) -> impl Iterator<Item = Result<String>> {
        let path = self.path;
        self.inner.lines().map(move |line| {
            line.map_err(|source| ResolveError::Io {
                path: path.clone(),
                source,
            })
        })
    }

    pub fn into_inner(self) -> BufferedStream {
        self.inner
    }
}

impl Read for TextReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for TextReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl std::fmt::Debug for TextReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextReader").field("path", &self.path).finish()
    }
}

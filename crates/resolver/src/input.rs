//! A stored path that can be resolved on demand

use crate::error::{ResolveError, Result};
use crate::location::Location;
use crate::resolver::{BufferedStream, Resolver};
use crate::text::TextReader;

/// A path kept around for later resolution
///
/// Nothing is resolved until one of the accessors is awaited, and every call
/// resolves afresh.
#[derive(Debug, Clone)]
pub struct Input {
    path: Option<String>,
    resolver: Resolver,
}

impl Input {
    pub fn new(path: impl Into<String>) -> Self {
        Self::from_option(Some(path.into()))
    }

    /// Accept a path that may be missing; a missing path fails on use
    pub fn from_option(path: Option<String>) -> Self {
        Self {
            path,
            resolver: Resolver::default(),
        }
    }

    /// Resolve through `resolver` instead of the default one
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub async fn open(&self) -> Result<BufferedStream> {
        self.resolver.open(self.require_path()?).await
    }

    pub async fn reader(&self) -> Result<TextReader> {
        self.resolver.reader(self.require_path()?).await
    }

    pub async fn location(&self) -> Result<Location> {
        self.resolver.locate(self.require_path()?).await
    }

    fn require_path(&self) -> Result<&str> {
        self.path.as_deref().ok_or(ResolveError::EmptyPath)
    }
}

impl From<&str> for Input {
    fn from(path: &str) -> Self {
        Input::new(path)
    }
}

impl From<String> for Input {
    fn from(path: String) -> Self {
        Input::new(path)
    }
}

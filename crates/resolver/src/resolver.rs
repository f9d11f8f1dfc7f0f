//! The path resolution chain
//!
//! [`Resolver::classify`] is the only place that decides where a path points.
//! [`Resolver::open`], [`Resolver::locate`] and [`Resolver::reader`] are all
//! derived from it, so the three outputs cannot disagree about precedence.

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::local;
use crate::location::{parse_locator, Location};
use crate::lookup::{ResourceDirs, ResourceLookup};
use crate::text::TextReader;
use crate::{FILE_PREFIX, LOCATOR_SEPARATOR, RESOURCE_PREFIX};
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

/// A resolved stream: the opened source behind a buffering layer
pub type BufferedStream = BufReader<Box<dyn Read + Send>>;

/// Which rule of the resolution chain produced a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `classpath:<name>` found in the lookup context
    EmbeddedResource,
    /// Path containing `://`, used as a network locator
    NetworkLocator,
    /// Path containing `file:`, remainder exists on disk
    ExplicitFile,
    /// Bare path that exists on disk
    LocalFile,
    /// Bare path missing on disk but known to the lookup context
    LookupFallback,
    /// Last attempt: the whole path parsed as a network locator
    CatchAll,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::EmbeddedResource => "embedded resource",
            Strategy::NetworkLocator => "network locator",
            Strategy::ExplicitFile => "explicit file",
            Strategy::LocalFile => "local file",
            Strategy::LookupFallback => "lookup fallback",
            Strategy::CatchAll => "catch-all locator",
        };
        f.write_str(name)
    }
}

/// Outcome of classifying a path
#[derive(Debug, Clone)]
pub struct Resolution {
    pub location: Location,
    pub strategy: Strategy,
}

/// Resolves path strings into locations and buffered streams
///
/// A resolver holds no per-call state. Cloning is cheap and a single
/// instance can be shared between tasks.
#[derive(Debug, Clone)]
pub struct Resolver {
    lookup: Arc<dyn ResourceLookup>,
    buffer_size: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::from_config(&ResolverConfig::default())
    }
}

impl Resolver {
    /// Create a resolver using `lookup` for resource names
    pub fn new(lookup: impl ResourceLookup + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
            buffer_size: crate::DEFAULT_BUFFER_SIZE,
        }
    }

    /// Create a resolver from configuration, searching the configured
    /// resource directories
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(ResourceDirs::new(config.resource_dirs.iter().cloned()))
            .with_buffer_size(config.buffer_size)
    }

    /// Set the capacity of the buffering layer
    ///
    /// A size of zero is raised to one byte. Configuration goes through
    /// [`ResolverConfig::validate`], which rejects zero before it gets here.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn lookup(&self) -> &dyn ResourceLookup {
        self.lookup.as_ref()
    }

    /// Decide where `path` points without opening anything
    ///
    /// Rules, first match wins:
    /// 1. `classpath:<name>`: `<name>` from the lookup context, or fail.
    /// 2. contains `://`: the whole path is a network locator, or fail.
    /// 3. contains `file:`: the text after the first `file:` if it exists.
    /// 4. otherwise: the path if it exists, else the lookup context.
    ///
    /// When rules 3 or 4 find nothing, the whole path is tried as a network
    /// locator before giving up with [`ResolveError::NotFound`]. A `file`
    /// locator at that stage (`FILE:data.txt`) stays relative to the working
    /// directory and must exist.
    pub async fn classify(&self, path: &str) -> Result<Resolution> {
        if path.is_empty() {
            return Err(ResolveError::EmptyPath);
        }

        if let Some(name) = path.strip_prefix(RESOURCE_PREFIX) {
            let location =
                self.lookup
                    .locate(name)
                    .ok_or_else(|| ResolveError::ResourceNotFound {
                        name: name.to_string(),
                    })?;
            return Ok(self.resolved(path, location, Strategy::EmbeddedResource));
        }

        if path.contains(LOCATOR_SEPARATOR) {
            let url = parse_locator(path).map_err(|reason| ResolveError::InvalidLocator {
                locator: path.to_string(),
                reason,
            })?;
            return Ok(self.resolved(path, Location::Url(url), Strategy::NetworkLocator));
        }

        // Substring match, unlike the start-anchored resource prefix
        if let Some((_, file)) = path.split_once(FILE_PREFIX) {
            let candidate = Path::new(file);
            if local::exists(candidate).await {
                let location = Location::File(candidate.to_path_buf());
                return Ok(self.resolved(path, location, Strategy::ExplicitFile));
            }
        } else {
            let candidate = Path::new(path);
            if local::exists(candidate).await {
                let location = Location::File(candidate.to_path_buf());
                return Ok(self.resolved(path, location, Strategy::LocalFile));
            }
            if let Some(location) = self.lookup.locate(path) {
                return Ok(self.resolved(path, location, Strategy::LookupFallback));
            }
        }

        let not_found = || ResolveError::NotFound {
            path: path.to_string(),
        };
        let url = parse_locator(path).map_err(|_| not_found())?;

        // No `://` reaches this point, so a `file` locator has no authority and
        // names a path relative to the working directory
        if url.scheme() == "file" {
            let relative = path.split_once(':').map(|(_, rest)| rest).unwrap_or_default();
            let candidate = Path::new(relative);
            if relative.is_empty() || !local::exists(candidate).await {
                return Err(not_found());
            }
            let location = Location::File(candidate.to_path_buf());
            return Ok(self.resolved(path, location, Strategy::CatchAll));
        }

        Ok(self.resolved(path, Location::Url(url), Strategy::CatchAll))
    }

    /// Resolve `path` to an unopened location
    ///
    /// Network locators are returned as-is; whether they point at anything is
    /// only discovered when they are opened.
    pub async fn locate(&self, path: &str) -> Result<Location> {
        Ok(self.classify(path).await?.location)
    }

    /// Resolve and open `path`, returning a buffered stream
    ///
    /// The caller owns the stream; dropping it closes the underlying source.
    pub async fn open(&self, path: &str) -> Result<BufferedStream> {
        let Resolution { location, strategy } = self.classify(path).await?;

        let reader = match location.open().await {
            Ok(reader) => reader,
            Err(e) if strategy == Strategy::CatchAll && e.is_not_found() => {
                return Err(ResolveError::NotFound {
                    path: path.to_string(),
                });
            }
            Err(e) if strategy == Strategy::CatchAll => {
                return Err(ResolveError::Unreadable {
                    path: path.to_string(),
                    source: Box::new(e),
                });
            }
            Err(e) => return Err(e),
        };

        Ok(BufReader::with_capacity(self.buffer_size, reader))
    }

    /// Resolve and open `path` as UTF-8 text
    pub async fn reader(&self, path: &str) -> Result<TextReader> {
        let stream = self.open(path).await?;
        Ok(TextReader::new(path, stream))
    }

    fn resolved(&self, path: &str, location: Location, strategy: Strategy) -> Resolution {
        tracing::debug!("Resolved '{}' via {} to {}", path, strategy, location);
        Resolution { location, strategy }
    }
}

//! Resolve a generic path string into a readable stream
//!
//! One path string can name bundled data, a local file, or something on the
//! network, and callers get the same buffered reader back either way.
//!
//! # Path Forms
//!
//! Checked in this order:
//!
//! - **`classpath:<name>`**: `<name>` from the resource lookup context, no fallback
//! - **contains `://`**: network locator (`http`, `https`, `file`, `s3`)
//! - **contains `file:`**: local file named by the text after `file:`, if it exists
//! - **anything else**: local file if it exists, else the lookup context
//!
//! Paths that match none of these are tried once more as a network locator
//! before resolution fails.
//!
//! # Example
//!
//! ```ignore
//! use anysource_resolver::{EmbeddedResources, Resolver};
//!
//! let resolver = Resolver::new(
//!     EmbeddedResources::new().with("defaults.toml", include_bytes!("defaults.toml")),
//! );
//!
//! // Bundled data
//! let defaults = resolver.reader("classpath:defaults.toml").await?.read_all()?;
//!
//! // Whatever the user passed: a file, a URL, or a resource name
//! let mut stream = resolver.open(&user_path).await?;
//! std::io::copy(&mut stream, &mut std::io::stdout())?;
//! ```

mod config;
mod error;
mod http;
mod input;
mod local;
mod location;
mod lookup;
mod resolver;
mod s3;
mod text;

pub use config::{
    ResolverConfig, BUFFER_SIZE_ENV, DEFAULT_BUFFER_SIZE, DEFAULT_RESOURCE_DIR, RESOURCE_PATH_ENV,
};
pub use error::{ResolveError, Result};
pub use http::HttpFileReader;
pub use input::Input;
pub use local::LocalFileReader;
pub use location::{Location, SUPPORTED_SCHEMES};
pub use lookup::{EmbeddedResources, NoResources, ResourceDirs, ResourceLookup};
pub use resolver::{BufferedStream, Resolution, Resolver, Strategy};
pub use s3::S3FileReader;
pub use text::TextReader;

/// Prefix selecting the resource lookup context
pub const RESOURCE_PREFIX: &str = "classpath:";

/// Token selecting an explicit local file (matched anywhere in the path)
pub const FILE_PREFIX: &str = "file:";

/// Substring marking a path as a network locator
pub const LOCATOR_SEPARATOR: &str = "://";

/// Resolve and open `path` with the default resolver
pub async fn open(path: &str) -> Result<BufferedStream> {
    Resolver::default().open(path).await
}

/// Resolve `path` to a location with the default resolver
pub async fn locate(path: &str) -> Result<Location> {
    Resolver::default().locate(path).await
}

/// Resolve and open `path` as text with the default resolver
pub async fn reader(path: &str) -> Result<TextReader> {
    Resolver::default().reader(path).await
}

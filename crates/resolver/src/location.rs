//! Unopened locations produced by resolution

use crate::error::{ResolveError, Result};
use crate::http::HttpFileReader;
use crate::local::LocalFileReader;
use crate::s3::{self, S3FileReader};
use crate::RESOURCE_PREFIX;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Network locator schemes that [`Location::open`] knows how to read
pub const SUPPORTED_SCHEMES: &[&str] = &["file", "http", "https", "s3"];

/// Where resolved data lives
///
/// Producing a `Location` performs no I/O beyond existence checks; nothing is
/// opened until [`Location::open`] is called.
#[derive(Debug, Clone)]
pub enum Location {
    /// Local file
    File(PathBuf),
    /// Network locator (`file`, `http`, `https` or `s3`)
    Url(Url),
    /// Bytes registered in a lookup context
    Embedded { name: String, data: Arc<[u8]> },
}

impl Location {
    /// Open this location and return an unbuffered reader positioned at the start
    pub async fn open(&self) -> Result<Box<dyn Read + Send>> {
        match self {
            Location::File(path) => LocalFileReader::open(path).await,
            Location::Url(url) => open_url(url).await,
            Location::Embedded { data, .. } => Ok(Box::new(std::io::Cursor::new(data.clone()))),
        }
    }

    /// Get a display name for logging
    pub fn display_name(&self) -> String {
        match self {
            Location::File(path) => path.display().to_string(),
            Location::Url(url) => url.to_string(),
            Location::Embedded { name, .. } => format!("{RESOURCE_PREFIX}{name}"),
        }
    }

    /// Local path backing this location, if there is one
    pub fn local_path(&self) -> Option<PathBuf> {
        match self {
            Location::File(path) => Some(path.clone()),
            Location::Url(url) if url.scheme() == "file" => url.to_file_path().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Parse `locator` as a network locator this crate can open
///
/// Returns the reason on failure so callers can decide which error to raise.
pub(crate) fn parse_locator(locator: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(locator).map_err(|e| e.to_string())?;

    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.scheme() == "s3" {
        s3::bucket_and_key(&url)?;
    }

    Ok(url)
}

async fn open_url(url: &Url) -> Result<Box<dyn Read + Send>> {
    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| ResolveError::InvalidLocator {
                    locator: url.to_string(),
                    reason: "not a local file path".to_string(),
                })?;
            LocalFileReader::open(&path).await
        }
        "http" | "https" => HttpFileReader::open(url).await,
        "s3" => S3FileReader::open(url).await,
        other => Err(ResolveError::InvalidLocator {
            locator: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

//! Local filesystem reader implementation

use crate::error::{ResolveError, Result};
use std::path::Path;

/// Opens local files for reading
pub struct LocalFileReader;

impl LocalFileReader {
    /// Open a local file and return a sync-compatible reader
    ///
    /// The file handle is opened asynchronously and then handed over as a
    /// plain `std::fs::File`, so reading it never needs a runtime.
    ///
    /// # Example
    /// ```ignore
    /// let reader = LocalFileReader::open(Path::new("data.csv")).await?;
    /// let reader = std::io::BufReader::new(reader);
    /// ```
    pub async fn open(path: &Path) -> Result<Box<dyn std::io::Read + Send>> {
        let io_err = |source| ResolveError::Io {
            path: path.display().to_string(),
            source,
        };

        let file = tokio::fs::File::open(path).await.map_err(io_err)?;
        let metadata = file.metadata().await.map_err(io_err)?;
        if metadata.is_dir() {
            return Err(io_err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path is a directory",
            )));
        }

        tracing::debug!("Opened local file: {} ({} bytes)", path.display(), metadata.len());

        Ok(Box::new(file.into_std().await))
    }
}

/// Check whether something exists at `path`
///
/// Errors while checking (permission denied on a parent, etc.) count as
/// "does not exist" so resolution moves on to the next candidate.
pub async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

//! HTTP/HTTPS reader implementation

use crate::error::{ResolveError, Result};
use url::Url;

/// Reads a resource over HTTP/HTTPS
pub struct HttpFileReader;

impl HttpFileReader {
    /// Fetch an HTTP or HTTPS URL and return a sync-compatible reader
    ///
    /// The whole body is read before returning, so the reader never has to
    /// reach back into the async runtime.
    ///
    /// # Example
    /// ```ignore
    /// let url = Url::parse("https://example.com/data.csv")?;
    /// let reader = HttpFileReader::open(&url).await?;
    /// ```
    pub async fn open(url: &Url) -> Result<Box<dyn std::io::Read + Send>> {
        let client = reqwest::Client::new();

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ResolveError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ResolveError::Http {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!("Fetched {} bytes from: {}", bytes.len(), url);

        Ok(Box::new(std::io::Cursor::new(bytes)))
    }
}

// HTTP behaviour is covered by the axum-backed tests in tests/network.rs

//! S3 reader implementation for `s3://bucket/key` locators

use crate::error::{ResolveError, Result};
use aws_config::BehaviorVersion;
use url::Url;

/// Reads an object from S3
pub struct S3FileReader;

impl S3FileReader {
    /// Fetch an S3 object and return a sync-compatible reader
    ///
    /// Credentials and region come from the default AWS provider chain.
    ///
    /// # Example
    /// ```ignore
    /// let url = Url::parse("s3://my-bucket/data/file.csv")?;
    /// let reader = S3FileReader::open(&url).await?;
    /// ```
    pub async fn open(url: &Url) -> Result<Box<dyn std::io::Read + Send>> {
        let (bucket, key) = bucket_and_key(url).map_err(|reason| ResolveError::InvalidLocator {
            locator: url.to_string(),
            reason,
        })?;

        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = aws_sdk_s3::Client::new(&sdk_config);

        let s3_err = |source: Box<dyn std::error::Error + Send + Sync>| ResolveError::S3 {
            locator: url.to_string(),
            source,
        };

        let response = client
            .get_object()
            .bucket(&bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| s3_err(Box::new(e)))?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| s3_err(Box::new(e)))?
            .into_bytes();

        tracing::debug!("Fetched {} bytes from: s3://{}/{}", bytes.len(), bucket, key);

        Ok(Box::new(std::io::Cursor::new(bytes)))
    }
}

/// Split an `s3://bucket/key/to/file` locator into bucket and key
pub fn bucket_and_key(url: &Url) -> std::result::Result<(String, String), String> {
    if url.scheme() != "s3" {
        return Err("S3 locator must start with 's3://'".to_string());
    }

    let bucket = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| "S3 locator must be in format 's3://bucket/key/to/file'".to_string())?;

    let key = url.path().trim_start_matches('/');
    if key.is_empty() {
        return Err("S3 locator must be in format 's3://bucket/key/to/file'".to_string());
    }

    Ok((bucket.to_string(), key.to_string()))
}

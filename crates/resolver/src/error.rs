//! Error types for path resolution.

use thiserror::Error;

/// Result alias used throughout the resolver crate.
pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

/// Errors that can occur while resolving or opening a path.
///
/// Every variant that concerns a particular input carries the offending path
/// (or locator) so callers can report it without keeping their own copy.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The path was empty or missing.
    #[error("Cannot load from an empty path")]
    EmptyPath,

    /// A `classpath:` path named a resource the lookup context does not have.
    #[error("Unable to find embedded resource '{name}'")]
    ResourceNotFound { name: String },

    /// No strategy produced a location and the path is not a network locator.
    #[error("Unable to find file or resource '{path}'")]
    NotFound { path: String },

    /// The path looked like a network locator but could not be used as one.
    #[error("Invalid network locator '{locator}': {reason}")]
    InvalidLocator { locator: String, reason: String },

    /// Opening or reading a local file failed.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP request itself failed.
    #[error("Failed to fetch URL '{url}': {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP server answered with a non-success status.
    #[error("HTTP request failed with status {status} for URL: {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Fetching an S3 object failed.
    #[error("Failed to fetch object from S3: {locator}: {source}")]
    S3 {
        locator: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The resolved stream was not valid text.
    #[error("Content of '{path}' is not valid UTF-8: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The last-resort locator for a path was found but could not be read.
    #[error("Unable to read file or resource '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: Box<ResolveError>,
    },

    /// Resolver configuration was malformed.
    #[error("Invalid resolver configuration: {0}")]
    Config(String),
}

impl ResolveError {
    /// The path or locator this error is about, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            ResolveError::EmptyPath | ResolveError::Config(_) => None,
            ResolveError::ResourceNotFound { name } => Some(name.as_str()),
            ResolveError::NotFound { path }
            | ResolveError::Io { path, .. }
            | ResolveError::Decode { path, .. }
            | ResolveError::Unreadable { path, .. } => Some(path.as_str()),
            ResolveError::InvalidLocator { locator, .. } | ResolveError::S3 { locator, .. } => {
                Some(locator.as_str())
            }
            ResolveError::Http { url, .. } | ResolveError::HttpStatus { url, .. } => Some(url.as_str()),
        }
    }

    /// True when the error means "nothing was found", as opposed to a failure
    /// while reading something that was found.
    pub fn is_not_found(&self) -> bool {
        match self {
            ResolveError::ResourceNotFound { .. } | ResolveError::NotFound { .. } => true,
            ResolveError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            ResolveError::HttpStatus { status, .. } => *status == reqwest::StatusCode::NOT_FOUND,
            ResolveError::Unreadable { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

//! Resolver configuration

use crate::error::{ResolveError, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default capacity of the buffering layer (8KiB)
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Directory searched for resources when nothing else is configured
pub const DEFAULT_RESOURCE_DIR: &str = "resources";

/// Overrides [`ResolverConfig::buffer_size`]
pub const BUFFER_SIZE_ENV: &str = "ANYSOURCE_BUFFER_SIZE";

/// Overrides [`ResolverConfig::resource_dirs`] (platform path-list syntax)
pub const RESOURCE_PATH_ENV: &str = "ANYSOURCE_RESOURCE_PATH";

/// Settings for [`Resolver::from_config`](crate::Resolver::from_config)
///
/// ```toml
/// buffer_size = 65536
/// resource_dirs = ["resources", "/usr/share/myapp"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub buffer_size: usize,
    pub resource_dirs: Vec<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            resource_dirs: vec![PathBuf::from(DEFAULT_RESOURCE_DIR)],
        }
    }
}

impl ResolverConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ResolveError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with `ANYSOURCE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Overlay `ANYSOURCE_*` environment variables onto this config
    pub fn with_env_overrides(self) -> Result<Self> {
        let buffer_size = std::env::var(BUFFER_SIZE_ENV).ok();
        let resource_path = std::env::var_os(RESOURCE_PATH_ENV);
        self.with_overrides(buffer_size.as_deref(), resource_path)
    }

    fn with_overrides(
        mut self,
        buffer_size: Option<&str>,
        resource_path: Option<OsString>,
    ) -> Result<Self> {
        if let Some(value) = buffer_size {
            self.buffer_size = value.trim().parse().map_err(|_| {
                ResolveError::Config(format!("{BUFFER_SIZE_ENV} must be a byte count, got '{value}'"))
            })?;
        }
        if let Some(value) = resource_path {
            self.resource_dirs = std::env::split_paths(&value)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect();
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(ResolveError::Config(
                "buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

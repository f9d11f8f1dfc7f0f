//! anysource
//!
//! Command-line front end for `anysource_resolver`: resolve a path string
//! (embedded resource name, URL, or local file) and print it or its location.
//!
//! # CLI Usage
//!
//! ```bash
//! # Copy a file, URL, or resource to stdout
//! anysource cat https://example.com/data.csv
//! anysource cat classpath:defaults.toml --resource-dir ./resources
//!
//! # Show where a path resolves to without reading it
//! anysource locate data.csv
//! ```

use anyhow::Context;
use anysource_resolver::{Resolver, ResolverConfig};
use clap::Parser;
use std::path::PathBuf;

// Re-export the resolver crate for convenience
pub use anysource_resolver as resolver;

#[derive(Parser, Clone, Debug, Default)]
pub struct ResolverOpts {
    /// Buffer size in bytes for resolved streams
    /// (overrides the config file and ANYSOURCE_BUFFER_SIZE)
    #[arg(long, global = true)]
    pub buffer_size: Option<usize>,

    /// Directory searched for resource names, may be repeated
    /// (overrides the config file and ANYSOURCE_RESOURCE_PATH)
    #[arg(long = "resource-dir", value_name = "DIR", global = true)]
    pub resource_dirs: Vec<PathBuf>,

    /// TOML file with resolver settings; accepts any path form, including URLs
    #[arg(long, value_name = "PATH", env = "ANYSOURCE_CONFIG", global = true)]
    pub config: Option<String>,
}

impl ResolverOpts {
    /// Build the effective configuration
    ///
    /// Precedence, lowest first: defaults, config file, environment, flags.
    pub async fn load_config(&self) -> anyhow::Result<ResolverConfig> {
        let base = match &self.config {
            Some(path) => {
                let text = Resolver::default()
                    .reader(path)
                    .await
                    .and_then(|reader| reader.read_all())
                    .with_context(|| format!("Failed to read config from '{path}'"))?;
                ResolverConfig::from_toml_str(&text)
                    .with_context(|| format!("Failed to parse config from '{path}'"))?
            }
            None => ResolverConfig::default(),
        };

        let mut config = base
            .with_env_overrides()
            .context("Invalid resolver settings in environment")?;

        if let Some(buffer_size) = self.buffer_size {
            config.buffer_size = buffer_size;
        }
        if !self.resource_dirs.is_empty() {
            config.resource_dirs = self.resource_dirs.clone();
        }
        config.validate()?;

        tracing::debug!("Resolver config: {:?}", config);
        Ok(config)
    }

    pub async fn resolver(&self) -> anyhow::Result<Resolver> {
        Ok(Resolver::from_config(&self.load_config().await?))
    }
}

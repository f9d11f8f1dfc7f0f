//! Command-line interface for anysource
//!
//! # Usage Examples
//!
//! ```bash
//! # Local file, explicit or bare
//! anysource cat file:data/input.csv
//! anysource cat data/input.csv
//!
//! # Network locators
//! anysource cat https://example.com/input.csv
//! anysource cat s3://my-bucket/exports/input.csv
//!
//! # Resources under the configured resource directories
//! anysource cat classpath:defaults.toml --resource-dir ./resources
//!
//! # Where would a path be read from?
//! anysource locate input.csv
//! ```
//!
//! Set `RUST_LOG=anysource_resolver=debug` to see which rule matched.

use anyhow::Context;
use anysource::ResolverOpts;
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser)]
#[command(name = "anysource")]
#[command(about = "Read a file, URL, or bundled resource through one path string")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    opts: ResolverOpts,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path and copy its contents to stdout
    Cat {
        /// Path to resolve (classpath:NAME, URL, file:PATH, or bare path)
        path: String,
    },

    /// Resolve a path and print where it points, without reading it
    Locate {
        /// Path to resolve (classpath:NAME, URL, file:PATH, or bare path)
        path: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let resolver = cli.opts.resolver().await?;

    match cli.command {
        Commands::Cat { path } => {
            let mut stream = resolver
                .open(&path)
                .await
                .with_context(|| format!("Failed to resolve '{path}'"))?;

            let mut stdout = std::io::stdout().lock();
            let copied = std::io::copy(&mut stream, &mut stdout)
                .with_context(|| format!("Failed to copy '{path}' to stdout"))?;
            stdout.flush()?;

            tracing::debug!("Copied {} bytes from '{}'", copied, path);
        }
        Commands::Locate { path } => {
            let resolution = resolver
                .classify(&path)
                .await
                .with_context(|| format!("Failed to resolve '{path}'"))?;
            println!("{}\t{}", resolution.strategy, resolution.location);
        }
    }

    Ok(())
}

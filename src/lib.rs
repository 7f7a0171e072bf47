//! # tsproj
//!
//! A CLI to scaffold TypeScript projects and manage `package.json` scripts.
//! This library provides functionality to initialize an npm project, install
//! TypeScript tooling as dev dependencies, write baseline project files, and
//! edit the `scripts` section of the project manifest.
//!
//! ## Features
//!
//! - Project scaffolding (`npm init`, dev dependencies, tsconfig, gitignore)
//! - Manifest script management (clear all scripts, add/overwrite one)
//! - Pluggable package-manager command via configuration
//! - Professional error handling and logging
//!
//! ## Example
//!
//! ```no_run
//! use tsproj::core::manifest::ManifestManager;
//!
//! let manager = ManifestManager::new();
//! manager.add_script("my-project".as_ref(), "dev", "ts-node src/index.ts")?;
//! # Ok::<(), tsproj::error::TsProjError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

//! Configuration management for tsproj
//!
//! Centralizes configuration options and provides validation.

use crate::{
    cli::{Args, Command, ScriptsCommand},
    error::TsProjError,
};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Package manager configuration
    pub package_manager: PackageManagerConfig,
}

/// Package manager configuration
///
/// Any package manager offering an equivalent non-interactive init and a
/// dev-dependency install subcommand satisfies this contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManagerConfig {
    /// Package manager executable (npm by default)
    pub command: String,
    /// Arguments for non-interactive project initialization
    pub init_args: Vec<String>,
    /// Arguments for installing packages as dev dependencies
    pub install_args: Vec<String>,
    /// Fixed dev dependencies installed into every new project
    pub dev_dependencies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            package_manager: PackageManagerConfig::default(),
        }
    }
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            command: "npm".to_string(),
            init_args: vec!["init".to_string(), "-y".to_string()],
            install_args: vec!["install".to_string(), "--save-dev".to_string()],
            dev_dependencies: crate::core::templates::DEFAULT_DEV_DEPS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, TsProjError> {
        let config = Self {
            debug: args.debug,
            ..Self::default()
        };

        config.validate(&args.command)?;
        Ok(config)
    }

    /// Validate configuration against the requested command
    pub fn validate(&self, command: &Command) -> Result<(), TsProjError> {
        if let Command::Scripts { command } = command {
            let project_dir = match command {
                ScriptsCommand::Clear { project_dir } => project_dir,
                ScriptsCommand::Add { project_dir, .. } => project_dir,
            };

            // A missing directory surfaces later as a missing manifest; only
            // an existing non-directory path is rejected up front.
            if project_dir.exists() && !project_dir.is_dir() {
                return Err(TsProjError::invalid_path(project_dir));
            }
        }

        Ok(())
    }

    /// Get the package manager init command with arguments
    pub fn get_init_cmd(&self) -> (String, Vec<String>) {
        (
            self.package_manager.command.clone(),
            self.package_manager.init_args.clone(),
        )
    }

    /// Get the package manager install command with arguments and packages
    pub fn get_install_cmd(&self) -> (String, Vec<String>) {
        let mut args = self.package_manager.install_args.clone();
        args.extend(self.package_manager.dev_dependencies.iter().cloned());
        (self.package_manager.command.clone(), args)
    }
}

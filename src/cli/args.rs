//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tsproj - Scaffold TypeScript projects and manage package.json scripts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "tsproj")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new TypeScript project scaffold
    Create {
        /// Name of the project directory to create
        project_name: String,

        /// Allow an existing directory (use with care)
        #[arg(long)]
        force: bool,
    },

    /// Manage npm scripts in package.json
    Scripts {
        #[command(subcommand)]
        command: ScriptsCommand,
    },
}

/// Script management subcommands
#[derive(Subcommand, Debug)]
pub enum ScriptsCommand {
    /// Clear all scripts from package.json
    Clear {
        /// Directory containing package.json
        #[arg(long = "project-dir", default_value = ".")]
        project_dir: PathBuf,
    },

    /// Add (or overwrite) a script in package.json
    Add {
        /// Script name
        script_name: String,

        /// Script command
        script_command: String,

        /// Directory containing package.json
        #[arg(long = "project-dir", default_value = ".")]
        project_dir: PathBuf,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

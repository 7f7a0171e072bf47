//! Command implementations for the CLI

use crate::{
    cli::{Command, ScriptsCommand},
    config::Config,
    core::{manifest::ManifestManager, scaffold::ProjectScaffolder},
};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Create {
            project_name,
            force,
        } => execute_create_command(config, project_name, *force),
        Command::Scripts { command } => match command {
            ScriptsCommand::Clear { project_dir } => execute_scripts_clear_command(project_dir),
            ScriptsCommand::Add {
                script_name,
                script_command,
                project_dir,
            } => execute_scripts_add_command(project_dir, script_name, script_command),
        },
    }
}

/// Execute the create command
#[instrument(skip(config))]
fn execute_create_command(config: &Config, project_name: &str, force: bool) -> anyhow::Result<()> {
    let project_dir = resolve_dir(project_name)?;
    info!("Creating project directory: {}", project_dir.display());

    let scaffolder = ProjectScaffolder::new(config.clone());
    scaffolder
        .create_project(&project_dir, force)
        .context("Failed to create project")?;

    let name = project_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_dir.display().to_string());
    info!("Project '{}' created successfully", name);
    Ok(())
}

/// Execute the scripts clear command
#[instrument]
fn execute_scripts_clear_command(project_dir: &Path) -> anyhow::Result<()> {
    let manager = ManifestManager::new();
    manager
        .clear_scripts(project_dir)
        .context("Failed to clear scripts")?;

    info!("All scripts cleared");
    Ok(())
}

/// Execute the scripts add command
#[instrument]
fn execute_scripts_add_command(
    project_dir: &Path,
    script_name: &str,
    script_command: &str,
) -> anyhow::Result<()> {
    let manager = ManifestManager::new();
    manager
        .add_script(project_dir, script_name, script_command)
        .context("Failed to add script")?;

    info!("Script added: \"{}\": \"{}\"", script_name, script_command);
    Ok(())
}

/// Resolve a project name to an absolute path
fn resolve_dir(value: &str) -> anyhow::Result<PathBuf> {
    std::path::absolute(value)
        .with_context(|| format!("Failed to resolve project path: {value}"))
}

//! Process execution utilities
//!
//! Provides safe process execution with proper error handling and logging.

use crate::error::{Result, TsProjError};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command in a working directory, inheriting stdout/stderr
    ///
    /// Blocks until the process exits. A spawn failure and a non-zero exit
    /// status both surface as [`TsProjError::Process`] carrying the rendered
    /// command line.
    #[instrument(skip(self))]
    pub fn run(&self, command: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let cmd_str = std::iter::once(command)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");

        if self.debug {
            debug!("Running command: {} (in {})", cmd_str, cwd.display());
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(command)
            .args(args)
            .current_dir(cwd)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| TsProjError::process(cmd_str.clone(), None, Some(e)))?;

        if !status.success() {
            return Err(TsProjError::process(cmd_str, status.code(), None));
        }

        debug!("Command completed successfully");
        Ok(())
    }

    /// Check if a command exists in PATH
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        debug!("Checking if command exists: {}", command);

        let result = Command::new("which")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let exists = status.success();
                debug!("Command '{}' exists: {}", command, exists);
                exists
            }
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[test]
    fn test_run_simple_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run("true", &[], &cwd());
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_respects_working_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let runner = ProcessRunner::new(false);

        runner
            .run("touch", &["marker.txt"], temp_dir.path())
            .unwrap();

        assert!(temp_dir.path().join("marker.txt").exists());
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run("false", &[], &cwd());

        if let Err(TsProjError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "false");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected Process error");
        }
    }

    #[test]
    fn test_command_line_includes_arguments() {
        let runner = ProcessRunner::new(false);
        let result = runner.run("false", &["--flag", "value"], &cwd());

        if let Err(TsProjError::Process { command, .. }) = result {
            assert_eq!(command, "false --flag value");
        } else {
            panic!("Expected Process error");
        }
    }

    #[test]
    fn test_run_unspawnable_command() {
        let runner = ProcessRunner::new(false);
        let result = runner.run("nonexistent_command_12345", &[], &cwd());

        if let Err(TsProjError::Process {
            exit_code, source, ..
        }) = result
        {
            assert_eq!(exit_code, None);
            assert!(source.is_some());
        } else {
            panic!("Expected Process error");
        }
    }

    #[test]
    fn test_command_exists() {
        let runner = ProcessRunner::new(false);

        assert!(runner.command_exists("echo"));
        assert!(!runner.command_exists("nonexistent_command_12345"));
    }
}

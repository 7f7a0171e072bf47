//! Error types for tsproj
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tsproj operations
#[derive(Error, Debug)]
pub enum TsProjError {
    /// External process exited non-zero or could not be started
    #[error("command failed: {command}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// package.json is absent where one is required
    #[error("package.json not found in: {}", path.display())]
    ManifestMissing { path: PathBuf },

    /// package.json content is not a valid JSON object
    #[error("package.json is not valid JSON: {}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Target scaffold directory already exists and --force was not given
    #[error("directory already exists: {} (use --force to reuse)", path.display())]
    DirectoryExists { path: PathBuf },

    /// Target path exists but is not a directory
    #[error("path exists and is not a directory: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// File system operation errors
    #[error("file system error: {operation} failed on {}", path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TsProjError {
    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            source,
        }
    }

    /// Create a new missing-manifest error
    pub fn manifest_missing<P: Into<PathBuf>>(path: P) -> Self {
        Self::ManifestMissing { path: path.into() }
    }

    /// Create a new manifest parse error
    pub fn manifest_parse<P: Into<PathBuf>>(path: P, source: Option<serde_json::Error>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            source,
        }
    }

    /// Create a new directory-exists error
    pub fn directory_exists<P: Into<PathBuf>>(path: P) -> Self {
        Self::DirectoryExists { path: path.into() }
    }

    /// Create a new invalid-path error
    pub fn invalid_path<P: Into<PathBuf>>(path: P) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TsProjError>;

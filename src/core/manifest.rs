//! Manifest (package.json) reading and updating
//!
//! Loads, mutates, and saves the project manifest. Only the `scripts` field
//! is interpreted; everything else round-trips untouched, with key order
//! preserved.

use crate::{
    error::{Result, TsProjError},
    utils::fs::FileSystemUtils,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Parsed manifest contents
pub type Manifest = Map<String, Value>;

/// Reads and updates a project's package.json
#[derive(Debug, Default)]
pub struct ManifestManager {
    fs_utils: FileSystemUtils,
}

impl ManifestManager {
    /// Create a new manifest manager
    pub fn new() -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Load package.json from a project directory
    #[instrument(skip(self))]
    pub fn load(&self, project_dir: &Path) -> Result<Manifest> {
        let path = Self::manifest_path(project_dir);
        if !path.exists() {
            return Err(TsProjError::manifest_missing(project_dir));
        }

        let content = self
            .fs_utils
            .read_file_to_string(&path)
            .map_err(|e| TsProjError::file_system("read", &path, e))?;

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| TsProjError::manifest_parse(&path, Some(e)))?;

        match value {
            Value::Object(manifest) => Ok(manifest),
            _ => Err(TsProjError::manifest_parse(&path, None)),
        }
    }

    /// Save a manifest to a project directory
    ///
    /// Serializes with 2-space indentation and a trailing newline,
    /// overwriting the existing file.
    #[instrument(skip(self, manifest))]
    pub fn save(&self, project_dir: &Path, manifest: &Manifest) -> Result<()> {
        let path = Self::manifest_path(project_dir);

        let json = serde_json::to_string_pretty(manifest)
            .map_err(|e| TsProjError::file_system("serialize", &path, e.into()))?;

        self.fs_utils
            .write_file(&path, format!("{json}\n"))
            .map_err(|e| TsProjError::file_system("write", &path, e))?;

        debug!("Saved manifest: {}", path.display());
        Ok(())
    }

    /// Remove all scripts from package.json
    #[instrument(skip(self))]
    pub fn clear_scripts(&self, project_dir: &Path) -> Result<()> {
        let mut manifest = self.load(project_dir)?;
        manifest.insert("scripts".to_string(), Value::Object(Map::new()));
        self.save(project_dir, &manifest)
    }

    /// Add or overwrite a script entry in package.json
    #[instrument(skip(self))]
    pub fn add_script(&self, project_dir: &Path, name: &str, command: &str) -> Result<()> {
        let mut manifest = self.load(project_dir)?;
        let mut scripts = Self::ensure_scripts(&manifest);
        scripts.insert(name.to_string(), Value::String(command.to_string()));
        manifest.insert("scripts".to_string(), Value::Object(scripts));
        self.save(project_dir, &manifest)
    }

    fn manifest_path(project_dir: &Path) -> PathBuf {
        project_dir.join("package.json")
    }

    /// Return the scripts object, coercing a missing or malformed field to
    /// an empty mapping
    fn ensure_scripts(manifest: &Manifest) -> Map<String, Value> {
        match manifest.get("scripts") {
            Some(Value::Object(scripts)) => scripts.clone(),
            _ => Map::new(),
        }
    }
}

//! Project scaffolding
//!
//! Coordinates directory creation, package manager initialization,
//! dev-dependency installation, baseline file writes, and script
//! configuration, in that order. Any step's failure aborts the sequence;
//! already-completed steps are not rolled back.

use crate::{
    config::Config,
    core::{manifest::ManifestManager, templates},
    error::{Result, TsProjError},
    utils::{fs::FileSystemUtils, process::ProcessRunner},
};
use std::path::Path;
use tracing::{info, instrument, warn};

/// Coordinates creation of a TypeScript project
pub struct ProjectScaffolder {
    config: Config,
    process_runner: ProcessRunner,
    fs_utils: FileSystemUtils,
    manifest: ManifestManager,
}

impl ProjectScaffolder {
    /// Create a new scaffolder with the given configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            process_runner: ProcessRunner::new(config.debug),
            fs_utils: FileSystemUtils::new(),
            manifest: ManifestManager::new(),
            config,
        }
    }

    /// Create a new TypeScript project scaffold
    #[instrument(skip(self))]
    pub fn create_project(&self, project_dir: &Path, force: bool) -> Result<()> {
        self.ensure_project_dir(project_dir, force)?;
        self.initialize_package_manager(project_dir)?;
        self.install_dev_dependencies(project_dir)?;
        self.write_project_files(project_dir)?;
        self.configure_scripts(project_dir)?;
        Ok(())
    }

    /// Validate the target directory and create it if missing
    fn ensure_project_dir(&self, project_dir: &Path, force: bool) -> Result<()> {
        if project_dir.exists() && !force {
            return Err(TsProjError::directory_exists(project_dir));
        }
        if project_dir.exists() && !self.fs_utils.is_dir(project_dir) {
            return Err(TsProjError::invalid_path(project_dir));
        }

        if !project_dir.exists() {
            self.fs_utils
                .create_dir_all(project_dir)
                .map_err(|e| TsProjError::file_system("create", project_dir, e))?;
        }

        Ok(())
    }

    /// Initialize the project non-interactively
    #[instrument(skip(self))]
    fn initialize_package_manager(&self, project_dir: &Path) -> Result<()> {
        let (cmd, args) = self.config.get_init_cmd();

        if !self.process_runner.command_exists(&cmd) {
            warn!("'{}' not found in PATH, initialization will fail", cmd);
        }

        info!("Initializing project with {}", cmd);
        let args_str: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run(&cmd, &args_str, project_dir)
    }

    /// Install TypeScript tooling as dev dependencies
    #[instrument(skip(self))]
    fn install_dev_dependencies(&self, project_dir: &Path) -> Result<()> {
        let (cmd, args) = self.config.get_install_cmd();

        info!(
            "Installing dev dependencies: {:?}",
            self.config.package_manager.dev_dependencies
        );
        let args_str: Vec<&str> = args.iter().map(String::as_str).collect();
        self.process_runner.run(&cmd, &args_str, project_dir)
    }

    /// Write baseline project files, overwriting unconditionally
    fn write_project_files(&self, project_dir: &Path) -> Result<()> {
        let files = [
            (project_dir.join(".gitignore"), templates::GITIGNORE),
            (project_dir.join("tsconfig.json"), templates::TSCONFIG),
            (project_dir.join("src").join("index.ts"), templates::INDEX_TS),
        ];

        for (path, content) in files {
            self.fs_utils
                .write_file(&path, content)
                .map_err(|e| TsProjError::file_system("write", &path, e))?;
        }

        Ok(())
    }

    /// Replace any initializer-generated scripts with the default set
    #[instrument(skip(self))]
    fn configure_scripts(&self, project_dir: &Path) -> Result<()> {
        self.manifest.clear_scripts(project_dir)?;

        for (name, command) in templates::DEFAULT_SCRIPTS {
            self.manifest.add_script(project_dir, name, command)?;
        }

        info!("Configured {} default scripts", templates::DEFAULT_SCRIPTS.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scaffolder() -> ProjectScaffolder {
        ProjectScaffolder::new(Config::default())
    }

    #[test]
    fn test_existing_directory_without_force_fails() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("proj");
        fs::create_dir(&project_dir).unwrap();

        let result = scaffolder().create_project(&project_dir, false);
        assert!(matches!(result, Err(TsProjError::DirectoryExists { .. })));

        // No files were created in the existing directory
        assert_eq!(fs::read_dir(&project_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_file_as_target_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("proj");
        fs::write(&project_dir, "not a directory").unwrap();

        let result = scaffolder().create_project(&project_dir, true);
        assert!(matches!(result, Err(TsProjError::InvalidPath { .. })));
    }

    #[test]
    fn test_failing_initializer_aborts_scaffold() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("proj");

        let mut config = Config::default();
        config.package_manager.command = "false".to_string();
        config.package_manager.init_args = vec![];

        let result = ProjectScaffolder::new(config).create_project(&project_dir, false);
        assert!(matches!(result, Err(TsProjError::Process { .. })));

        // Directory was created, but no template files were written
        assert!(project_dir.is_dir());
        assert!(!project_dir.join("tsconfig.json").exists());
    }

    /// Stub package manager: "init" writes a manifest with a leftover
    /// script, any other invocation succeeds silently.
    #[cfg(unix)]
    fn write_stub_package_manager(dir: &std::path::Path) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let stub = dir.join("fake-npm");
        fs::write(
            &stub,
            "#!/bin/sh\n\
             if [ \"$1\" = \"init\" ]; then\n\
             printf '{\\n  \"name\": \"fixture\",\\n  \"scripts\": {\\n    \"test\": \"echo leftover\"\\n  }\\n}\\n' > package.json\n\
             fi\n\
             exit 0\n",
        )
        .unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();
        stub
    }

    #[cfg(unix)]
    fn stub_config(stub: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.package_manager.command = stub.to_string_lossy().to_string();
        config
    }

    #[cfg(unix)]
    fn assert_default_scripts(project_dir: &std::path::Path) {
        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(project_dir.join("package.json")).unwrap())
                .unwrap();
        let scripts = manifest["scripts"].as_object().unwrap();
        assert_eq!(scripts.len(), 4);
        assert_eq!(scripts["dev"], "ts-node src/index.ts");
        assert_eq!(scripts["build"], "tsc");
        assert_eq!(scripts["typecheck"], "tsc --noEmit");
        assert_eq!(scripts["start"], "node dist/index.js");
    }

    #[cfg(unix)]
    #[test]
    fn test_create_project_with_stub_package_manager() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("proj");

        let stub = write_stub_package_manager(temp_dir.path());

        ProjectScaffolder::new(stub_config(&stub))
            .create_project(&project_dir, false)
            .unwrap();

        assert!(project_dir.join("package.json").exists());
        assert!(project_dir.join(".gitignore").exists());
        assert!(project_dir.join("tsconfig.json").exists());
        assert!(project_dir.join("src").join("index.ts").exists());

        // Initializer-generated scripts were replaced with exactly the
        // default set
        assert_default_scripts(&project_dir);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_project_with_force_overwrites_existing_templates() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path().join("proj");

        // Pre-existing project with stale template files
        fs::create_dir_all(project_dir.join("src")).unwrap();
        fs::write(project_dir.join("tsconfig.json"), "stale tsconfig").unwrap();
        fs::write(project_dir.join(".gitignore"), "stale ignore").unwrap();
        fs::write(project_dir.join("src").join("index.ts"), "stale code").unwrap();

        let stub = write_stub_package_manager(temp_dir.path());

        ProjectScaffolder::new(stub_config(&stub))
            .create_project(&project_dir, true)
            .unwrap();

        assert_eq!(
            fs::read_to_string(project_dir.join(".gitignore")).unwrap(),
            templates::GITIGNORE
        );
        assert_eq!(
            fs::read_to_string(project_dir.join("tsconfig.json")).unwrap(),
            templates::TSCONFIG
        );
        assert_eq!(
            fs::read_to_string(project_dir.join("src").join("index.ts")).unwrap(),
            templates::INDEX_TS
        );
        assert_default_scripts(&project_dir);
    }
}

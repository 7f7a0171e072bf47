//! Core functionality modules

pub mod manifest;
pub mod scaffold;
pub mod templates;

pub use manifest::ManifestManager;
pub use scaffold::ProjectScaffolder;

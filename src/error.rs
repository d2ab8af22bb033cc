use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or querying a filesystem layout
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A required host property (the working directory) is unavailable
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// No layout could be identified, or a configured override failed
    #[error("Cannot identify filesystem layout: {0}")]
    Resolution(String),

    /// A concrete layout could not read the build metadata it needs
    #[error("Failed to read build metadata at {path}: {message}")]
    Metadata { path: PathBuf, message: String },
}

impl LayoutError {
    pub fn is_resolution(&self) -> bool {
        matches!(self, LayoutError::Resolution(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, LayoutError::Configuration(_))
    }
}

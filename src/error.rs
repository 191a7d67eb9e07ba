use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlaliasError {
    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("Package manager error: {0}")]
    PackageManagerError(String),

    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    /// Path resolution or validation error
    #[error("Path error: {0}")]
    PathError(String),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FlaliasError>;

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for armeer operations
#[derive(Debug, Error)]
pub enum ArmeerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task error: {0}")]
    Task(String),

    #[error("No files match {pattern} under {}", root.display())]
    NoMatches { pattern: String, root: PathBuf },

    #[error("Model error: {0}")]
    Model(String),
}

/// Result type alias for armeer operations
pub type ArmeerResult<T> = Result<T, ArmeerError>;

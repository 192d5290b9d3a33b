use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenvPipError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to create virtual environment in {}", path.display())]
    EnvCreation { path: PathBuf, stderr: String },

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("{failed} of {total} package operation(s) failed")]
    PackagesFailed { failed: usize, total: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VenvPipError>;

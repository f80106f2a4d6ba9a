//! Top-level error type for helm-images.

use crate::config::ConfigError;
use crate::helm::HelmError;
use crate::k8s::ExtractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImagesError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Helm(#[from] HelmError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot render the output to multiple formats, enable only one of '--yaml --json --table' at a time")]
    MultipleFormats,

    #[error("failed to serialize output as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize output as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for helm-images operations
pub type Result<T> = std::result::Result<T, ImagesError>;

//! Errors raised while resolving or extracting images from a manifest.

use thiserror::Error;

/// Errors that can occur while resolving a manifest's kind or extracting its images.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The text is not valid YAML, or does not match the shape expected for the kind.
    #[error("failed to decode manifest: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// A field expected to be a string holds a different YAML type.
    #[error("failed to get {field} from the manifest, '{field}' is not type string (found {found})")]
    TypeMismatch {
        /// Name of the offending field
        field: &'static str,
        /// YAML type that was found instead
        found: &'static str,
    },

    /// The manifest's apiVersion is recognized but not supported for this kind.
    #[error("{kind} api version '{api_version}' is not supported, only the latest api version is")]
    UnsupportedApiVersion {
        /// Resource kind tag
        kind: &'static str,
        /// apiVersion declared by the manifest
        api_version: String,
    },

    /// A scalar field the kind requires is absent.
    #[error("{kind} manifest is missing required field '{field}'")]
    MissingField {
        /// Resource kind tag
        kind: &'static str,
        /// Dotted path of the missing field
        field: &'static str,
    },
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

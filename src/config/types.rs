use crate::formatter::OutputFormat;
use crate::k8s::{ResourceKind, supported_kinds};
use serde::{Deserialize, Serialize};

/// Settings for one images run.
///
/// Passed explicitly into every pipeline call; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Kinds to extract images from. Tags outside [`supported_kinds`] are ignored.
    pub kinds: Vec<String>,
    /// Keep only images whose reference contains one of these registries
    pub registries: Vec<String>,
    /// Report a single deduplicated, sorted list instead of per-manifest records
    pub unique: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            kinds: supported_kinds().into_iter().map(String::from).collect(),
            registries: Vec::new(),
            unique: false,
            format: OutputFormat::default(),
        }
    }
}

impl ImagesConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict extraction to the given kinds.
    pub fn with_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kinds = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Add a registry filter.
    pub fn registry(mut self, registry: impl Into<String>) -> Self {
        self.registries.push(registry.into());
        self
    }

    /// Collapse the output into unique images.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Resolve the configured kind filter to supported kinds.
    ///
    /// Unknown tags are logged and dropped.
    pub fn enabled_kinds(&self) -> Vec<ResourceKind> {
        let mut enabled = Vec::new();
        for tag in &self.kinds {
            match ResourceKind::from_kind(tag) {
                Some(kind) if !enabled.contains(&kind) => enabled.push(kind),
                Some(_) => {}
                None => log::warn!(
                    "ignoring kind '{}', supported kinds are: {}",
                    tag,
                    supported_kinds().join(", ")
                ),
            }
        }
        enabled
    }

    /// Check if an image passes the registry filter.
    pub fn matches_registry(&self, image: &str) -> bool {
        self.registries.is_empty() || self.registries.iter().any(|r| image.contains(r.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_kind() {
        let config = ImagesConfig::default();
        assert_eq!(config.enabled_kinds(), ResourceKind::ALL.to_vec());
        assert!(config.matches_registry("docker.io/library/nginx:1.25"));
    }

    #[test]
    fn test_enabled_kinds_drops_unknown_and_duplicates() {
        let config = ImagesConfig::new().with_kinds(["Pod", "Service", "Pod", "Receiver"]);
        assert_eq!(
            config.enabled_kinds(),
            vec![ResourceKind::Pod, ResourceKind::ThanosReceiver]
        );
    }

    #[test]
    fn test_registry_filter() {
        let config = ImagesConfig::new().registry("quay.io");
        assert!(config.matches_registry("quay.io/prometheus/prometheus:v2.47.0"));
        assert!(!config.matches_registry("docker.io/grafana/grafana:10.1.0"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ImagesConfig = toml::from_str("unique = true\nregistries = [\"quay.io\"]\n").unwrap();
        assert!(config.unique);
        assert_eq!(config.registries, vec!["quay.io"]);
        assert_eq!(config.kinds.len(), ResourceKind::ALL.len());
        assert_eq!(config.format, OutputFormat::Plain);
    }
}

//! The uniform output of every extractor.

use crate::k8s::kind::ResourceKind;
use serde::{Deserialize, Serialize};

/// Images found in one manifest document.
///
/// `images` keeps discovery order: primary containers, init containers,
/// environment-variable images, then kind-specific sub-images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Kind tag of the manifest the images came from
    pub kind: String,
    /// `metadata.name` of the manifest, empty if unset
    pub name: String,
    /// Image references in discovery order
    #[serde(rename = "image", default)]
    pub images: Vec<String>,
}

impl ImageRecord {
    /// Create a record for the given kind.
    pub fn new(kind: ResourceKind, name: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            name: name.into(),
            images,
        }
    }

    /// Check if the manifest carried no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_image_key() {
        let record = ImageRecord::new(
            ResourceKind::ThanosReceiver,
            "receiver",
            vec!["quay.io/thanos/thanos:v0.32.0".to_string()],
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "Receiver");
        assert_eq!(json["name"], "receiver");
        assert_eq!(json["image"][0], "quay.io/thanos/thanos:v0.32.0");
    }

    #[test]
    fn test_empty_record_keeps_image_list() {
        let record = ImageRecord::new(ResourceKind::ConfigMap, "settings", Vec::new());
        assert!(record.is_empty());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"image\":[]"));
    }
}

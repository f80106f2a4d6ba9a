//! ConfigMap with its `data` kept in document order.

use super::null_as_default;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigMap {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ConfigData,
}

impl ConfigMap {
    pub fn name(&self) -> String {
        self.metadata.name.clone().unwrap_or_default()
    }
}

/// String-to-string entries in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigData(Vec<(String, String)>);

impl ConfigData {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ConfigData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigDataVisitor;

        impl<'de> Visitor<'de> for ConfigDataVisitor {
            type Value = ConfigData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of string keys to string values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                Ok(ConfigData(entries))
            }
        }

        deserializer.deserialize_map(ConfigDataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_keeps_declaration_order() {
        let yaml = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: settings
data:
  zeta: "1"
  alpha: "2"
  mid: "3"
"#;
        let cm: ConfigMap = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&str> = cm.data.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(cm.name(), "settings");
    }

    #[test]
    fn test_data_rejects_non_string_values() {
        let result = serde_yaml::from_str::<ConfigMap>("data:\n  nested:\n    a: b\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_data_is_empty() {
        let cm: ConfigMap = serde_yaml::from_str("kind: ConfigMap\nbinaryData: {}\n").unwrap();
        assert!(cm.data.is_empty());
    }
}

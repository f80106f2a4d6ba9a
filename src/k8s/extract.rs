//! Per-kind image extraction.
//!
//! Extraction is a two-phase parse: the kind is sniffed from an untyped
//! mapping first (see [`resolve_kind`](crate::k8s::resolve_kind)), then the
//! document is decoded into the kind's typed shape and walked.

use crate::k8s::containers::{env_images, flatten_images};
use crate::k8s::error::{ExtractError, Result};
use crate::k8s::kind::{ResourceKind, top_level_mapping, yaml_type_name};
use crate::k8s::object::*;
use crate::k8s::record::ImageRecord;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

impl ResourceKind {
    /// Decode `raw` as this kind and collect every image it references.
    pub fn extract(self, raw: &str) -> Result<ImageRecord> {
        let (name, images) = match self {
            Self::Deployment => deployment_images(decode(raw)?),
            Self::StatefulSet | Self::DaemonSet | Self::ReplicaSet | Self::Job => {
                template_images(decode(raw)?)
            }
            Self::CronJob => cronjob_images(decode(raw)?),
            Self::Pod => pod_images(decode(raw)?),
            Self::ConfigMap => config_map_images(decode(raw)?),
            Self::Alertmanager => alertmanager_images(decode(raw)?)?,
            Self::Prometheus => prometheus_images(decode(raw)?)?,
            Self::ThanosRuler => thanos_ruler_images(decode(raw)?),
            Self::Grafana => grafana_images(raw)?,
            Self::Thanos => thanos_images(decode(raw)?),
            Self::ThanosReceiver => receiver_images(decode(raw)?),
        };

        log::debug!("extracted {} image(s) from {} '{}'", images.len(), self, name);
        Ok(ImageRecord::new(self, name, images))
    }
}

/// Extract images from a document whose kind tag is already known.
///
/// Returns `Ok(None)` when the tag is not a supported kind.
pub fn extract(kind: &str, raw: &str) -> Result<Option<ImageRecord>> {
    match ResourceKind::from_kind(kind) {
        Some(kind) => kind.extract(raw).map(Some),
        None => Ok(None),
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_yaml::from_str(raw)?)
}

type Extracted = (String, Vec<String>);

fn deployment_images(dep: Deployment) -> Extracted {
    let pod_spec = dep.spec.pod_spec();
    let mut images = flatten_images([pod_spec]);
    if let Some(spec) = pod_spec {
        images.extend(env_images(spec));
    }
    (dep.name(), images)
}

fn template_images(obj: Manifest<TemplateSpec>) -> Extracted {
    let images = flatten_images([obj.spec.pod_spec()]);
    (obj.name(), images)
}

fn cronjob_images(cron: CronJob) -> Extracted {
    let images = flatten_images([cron.spec.pod_spec()]);
    (cron.name(), images)
}

fn pod_images(pod: Pod) -> Extracted {
    let images = flatten_images([Some(&pod.spec)]);
    (pod.name(), images)
}

fn config_map_images(cm: ConfigMap) -> Extracted {
    let images = cm
        .data
        .iter()
        .filter(|(key, _)| key.to_lowercase().contains("image"))
        .map(|(_, value)| value.to_string())
        .collect();
    (cm.name(), images)
}

fn alertmanager_images(am: Alertmanager) -> Result<Extracted> {
    let image = required_image(ResourceKind::Alertmanager, am.spec.image.as_ref())?;
    Ok((am.name(), vec![image]))
}

fn prometheus_images(prom: Prometheus) -> Result<Extracted> {
    let mut images = flatten_images([Some(&prom.spec.pod_spec())]);
    images.push(required_image(ResourceKind::Prometheus, prom.spec.image.as_ref())?);
    Ok((prom.name(), images))
}

// The operator defaults the ruler image, so an unset one is reported empty.
fn thanos_ruler_images(ruler: ThanosRuler) -> Extracted {
    let mut images = flatten_images([Some(&ruler.spec.pod_spec())]);
    images.push(ruler.spec.image.clone().unwrap_or_default());
    (ruler.name(), images)
}

fn grafana_images(raw: &str) -> Result<Extracted> {
    // The legacy layout is rejected before its spec is decoded.
    let top = top_level_mapping(raw)?;
    match top.get("apiVersion") {
        Some(Value::String(v)) if v == LEGACY_API_VERSION => {
            return Err(ExtractError::UnsupportedApiVersion {
                kind: ResourceKind::Grafana.as_str(),
                api_version: v.clone(),
            });
        }
        Some(Value::String(_)) | Some(Value::Null) | None => {}
        Some(other) => {
            return Err(ExtractError::TypeMismatch {
                field: "apiVersion",
                found: yaml_type_name(other),
            });
        }
    }

    let grafana: Grafana = serde_yaml::from_value(Value::Mapping(top))?;
    let pod_spec = grafana
        .spec
        .deployment
        .as_ref()
        .and_then(TemplateOverride::pod_spec);
    Ok((grafana.name(), flatten_images([pod_spec])))
}

fn thanos_images(thanos: Thanos) -> Extracted {
    let images = flatten_images(thanos.spec.pod_specs());
    (thanos.name(), images)
}

fn receiver_images(receiver: ThanosReceiver) -> Extracted {
    let images = flatten_images(receiver.spec.receiver_groups.iter().map(ReceiverGroup::pod_spec));
    (receiver.name(), images)
}

fn required_image(kind: ResourceKind, image: Option<&String>) -> Result<String> {
    image.cloned().ok_or(ExtractError::MissingField {
        kind: kind.as_str(),
        field: "spec.image",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deployment_order() {
        let yaml = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  template:
    spec:
      containers:
      - name: a
        image: a:1
        env:
        - name: SIDECAR_IMAGE
          value: sidecar:2
      - name: b
        image: b:1
        env:
        - name: helperImage
          value: helper:3
      initContainers:
      - name: c
        image: c:1
"#;
        let record = ResourceKind::Deployment.extract(yaml).unwrap();
        assert_eq!(record.kind, "Deployment");
        assert_eq!(record.name, "web");
        assert_eq!(record.images, vec!["a:1", "b:1", "c:1", "sidecar:2", "helper:3"]);
    }

    #[test]
    fn test_statefulset_ignores_env_images() {
        let yaml = r#"
kind: StatefulSet
metadata:
  name: db
spec:
  template:
    spec:
      containers:
      - name: db
        image: postgres:16
        env:
        - name: BACKUP_IMAGE
          value: backup:1
"#;
        let record = ResourceKind::StatefulSet.extract(yaml).unwrap();
        assert_eq!(record.images, vec!["postgres:16"]);
    }

    #[test]
    fn test_config_map_filters_keys() {
        let yaml = r#"
kind: ConfigMap
metadata:
  name: settings
data:
  image-a: x
  other: y
  IMAGE_B: z
"#;
        let record = ResourceKind::ConfigMap.extract(yaml).unwrap();
        assert_eq!(record.images, vec!["x", "z"]);
    }

    #[test]
    fn test_alertmanager_requires_image() {
        let yaml = "kind: Alertmanager\nmetadata:\n  name: main\nspec:\n  replicas: 3\n";
        let err = ResourceKind::Alertmanager.extract(yaml).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingField {
                kind: "Alertmanager",
                field: "spec.image"
            }
        ));
    }

    #[test]
    fn test_thanos_ruler_image_last() {
        let yaml = r#"
kind: ThanosRuler
metadata:
  name: ruler
spec:
  image: quay.io/thanos/thanos:v0.32.0
  containers:
  - name: sidecar
    image: sidecar:1
  initContainers:
  - name: init
    image: init:1
"#;
        let record = ResourceKind::ThanosRuler.extract(yaml).unwrap();
        assert_eq!(record.kind, "ThanosRuler");
        assert_eq!(
            record.images,
            vec!["sidecar:1", "init:1", "quay.io/thanos/thanos:v0.32.0"]
        );
    }

    #[test]
    fn test_thanos_ruler_without_image_reports_empty() {
        let yaml = "kind: ThanosRuler\nmetadata:\n  name: r\nspec:\n  containers:\n  - name: s\n    image: sidecar:1\n";
        let record = ResourceKind::ThanosRuler.extract(yaml).unwrap();
        assert_eq!(record.name, "r");
        assert_eq!(record.images, vec!["sidecar:1", ""]);
    }

    #[test]
    fn test_prometheus_without_image_is_missing_field() {
        let yaml = "kind: Prometheus\nmetadata:\n  name: k8s\nspec:\n  replicas: 2\n";
        let err = ResourceKind::Prometheus.extract(yaml).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingField {
                kind: "Prometheus",
                field: "spec.image"
            }
        ));
    }

    #[test]
    fn test_prometheus_numeric_env_value() {
        let yaml = r#"
kind: Prometheus
metadata:
  name: k8s
spec:
  image: prom:1
  containers:
  - name: a
    image: a:1
    env:
    - name: PORT
      value: 8080
"#;
        let record = ResourceKind::Prometheus.extract(yaml).unwrap();
        assert_eq!(record.images, vec!["a:1", "prom:1"]);
    }

    #[test]
    fn test_grafana_non_string_api_version() {
        let yaml = "apiVersion: [integreatly.org]\nkind: Grafana\nmetadata:\n  name: g\n";
        let err = ResourceKind::Grafana.extract(yaml).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::TypeMismatch {
                field: "apiVersion",
                found: "sequence"
            }
        ));
    }

    #[test]
    fn test_grafana_legacy_rejected_even_when_malformed() {
        let yaml = "apiVersion: integreatly.org/v1alpha1\nkind: Grafana\nspec:\n  deployment: 5\n";
        let err = ResourceKind::Grafana.extract(yaml).unwrap_err();
        match err {
            ExtractError::UnsupportedApiVersion { api_version, .. } => {
                assert_eq!(api_version, "integreatly.org/v1alpha1")
            }
            other => panic!("expected UnsupportedApiVersion, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let yaml = "kind: Pod\nspec:\n  containers: nginx\n";
        let err = ResourceKind::Pod.extract(yaml).unwrap_err();
        assert!(matches!(err, ExtractError::Decode(_)));
    }

    #[test]
    fn test_extract_unknown_tag_is_none() {
        assert!(extract("Service", "kind: Service\n").unwrap().is_none());
        assert!(extract("Pod", "kind: Pod\n").unwrap().is_some());
    }
}

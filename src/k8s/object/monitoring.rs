//! prometheus-operator custom resources (monitoring.coreos.com/v1).

use super::{ContainerSpec, Manifest, PodSpec, null_as_default};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertmanagerSpec {
    #[serde(default)]
    pub image: Option<String>,
}

/// Spec shared by Prometheus and ThanosRuler: a main image plus sidecar and
/// init containers declared inline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusSpec {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub containers: Vec<ContainerSpec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub init_containers: Vec<ContainerSpec>,
}

impl PrometheusSpec {
    /// The inline containers as a pod spec.
    pub fn pod_spec(&self) -> PodSpec {
        PodSpec {
            containers: self.containers.clone(),
            init_containers: self.init_containers.clone(),
        }
    }
}

pub type Alertmanager = Manifest<AlertmanagerSpec>;
pub type Prometheus = Manifest<PrometheusSpec>;
pub type ThanosRuler = Manifest<PrometheusSpec>;

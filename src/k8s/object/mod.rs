//! Typed decode targets for every supported kind.
//!
//! Only the fields that can carry images are modelled; everything else in a
//! manifest is ignored during decoding. Fields that rendered charts commonly
//! emit as an explicit `null` decode to their empty value.

pub mod config_map;
pub mod grafana;
pub mod monitoring;
pub mod thanos;
pub mod workload;

pub use config_map::{ConfigData, ConfigMap};
pub use grafana::{Grafana, GrafanaSpec, LEGACY_API_VERSION};
pub use monitoring::{Alertmanager, AlertmanagerSpec, Prometheus, PrometheusSpec, ThanosRuler};
pub use thanos::{
    ReceiverGroup, ReceiverSpec, Thanos, ThanosComponent, ThanosReceiver, ThanosRule, ThanosSpec,
};
pub use workload::*;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Deserializer};

/// A manifest with standard object metadata and a kind-specific `spec`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "S: Deserialize<'de> + Default"))]
pub struct Manifest<S> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub api_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: S,
}

impl<S> Manifest<S> {
    /// `metadata.name`, or an empty string when unset.
    pub fn name(&self) -> String {
        self.metadata.name.clone().unwrap_or_default()
    }
}

/// Decode an explicit `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

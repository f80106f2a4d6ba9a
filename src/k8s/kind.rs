//! Resource kinds and the loosely typed kind sniff.
//!
//! Resolving a kind only looks at the top-level `kind` field, so it is cheap
//! enough to run over every document before committing to a full typed decode.

use crate::k8s::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fmt;

const KIND_FIELD: &str = "kind";

/// Resource kinds that images can be extracted from.
///
/// The set is closed: supporting another kind means adding a variant here and
/// an arm in [`ResourceKind::extract`](crate::k8s::ResourceKind::extract).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    // Core workloads
    Deployment,
    StatefulSet,
    DaemonSet,
    CronJob,
    Job,
    ReplicaSet,
    Pod,

    // prometheus-operator
    Alertmanager,
    Prometheus,
    ThanosRuler,

    // grafana-operator
    Grafana,

    // thanos-operator
    Thanos,
    #[serde(rename = "Receiver")]
    ThanosReceiver,

    ConfigMap,
}

impl ResourceKind {
    /// Every supported kind, in the order reported by [`supported_kinds`].
    pub const ALL: [ResourceKind; 14] = [
        Self::Deployment,
        Self::StatefulSet,
        Self::DaemonSet,
        Self::CronJob,
        Self::Job,
        Self::ReplicaSet,
        Self::Pod,
        Self::Alertmanager,
        Self::Prometheus,
        Self::ThanosRuler,
        Self::Grafana,
        Self::Thanos,
        Self::ThanosReceiver,
        Self::ConfigMap,
    ];

    /// Get the kind tag as it appears in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deployment => "Deployment",
            Self::StatefulSet => "StatefulSet",
            Self::DaemonSet => "DaemonSet",
            Self::CronJob => "CronJob",
            Self::Job => "Job",
            Self::ReplicaSet => "ReplicaSet",
            Self::Pod => "Pod",
            Self::Alertmanager => "Alertmanager",
            Self::Prometheus => "Prometheus",
            Self::ThanosRuler => "ThanosRuler",
            Self::Grafana => "Grafana",
            Self::Thanos => "Thanos",
            Self::ThanosReceiver => "Receiver",
            Self::ConfigMap => "ConfigMap",
        }
    }

    /// Look up a kind by its exact tag. Matching is case-sensitive.
    pub fn from_kind(kind: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == kind)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tags of every supported kind.
pub fn supported_kinds() -> Vec<&'static str> {
    ResourceKind::ALL.iter().map(|k| k.as_str()).collect()
}

/// Recover the declared `kind` of a single manifest document.
///
/// An empty document yields an empty kind rather than an error. The returned
/// tag is not checked against [`supported_kinds`]; callers decide what to do
/// with kinds they cannot extract.
pub fn resolve_kind(raw: &str) -> Result<String> {
    let top = top_level_mapping(raw)?;
    if top.is_empty() {
        return Ok(String::new());
    }

    match top.get(KIND_FIELD) {
        Some(Value::String(kind)) => Ok(kind.clone()),
        other => Err(ExtractError::TypeMismatch {
            field: KIND_FIELD,
            found: other.map(yaml_type_name).unwrap_or("nothing"),
        }),
    }
}

/// Parse a document as an untyped top-level mapping. Empty documents parse
/// as an empty mapping.
pub(crate) fn top_level_mapping(raw: &str) -> Result<Mapping> {
    match serde_yaml::from_str::<Value>(raw)? {
        Value::Null => Ok(Mapping::new()),
        value => Ok(serde_yaml::from_value(value)?),
    }
}

pub(crate) fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

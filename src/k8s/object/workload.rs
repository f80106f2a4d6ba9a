//! Pod templates and the core workload kinds.

use super::{Manifest, null_as_default};
use serde::Deserialize;

/// A container in a pod template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Empty when the container declares no image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: Vec<EnvVar>,
}

/// A container environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvVar {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Literal value; `None` for variables sourced through `valueFrom`.
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub containers: Vec<ContainerSpec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub init_containers: Vec<ContainerSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodTemplateSpec {
    #[serde(default)]
    pub spec: Option<PodSpec>,
}

/// Any spec that wraps a pod template under `template`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateSpec {
    #[serde(default)]
    pub template: Option<PodTemplateSpec>,
}

impl TemplateSpec {
    pub fn pod_spec(&self) -> Option<&PodSpec> {
        self.template.as_ref()?.spec.as_ref()
    }
}

/// An embedded object shaped like `{metadata, spec: {template: ...}}`, as used
/// by operator CRDs to override the workloads they generate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateOverride {
    #[serde(default)]
    pub spec: Option<TemplateSpec>,
}

impl TemplateOverride {
    pub fn pod_spec(&self) -> Option<&PodSpec> {
        self.spec.as_ref()?.pod_spec()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJobSpec {
    #[serde(default)]
    pub job_template: Option<JobTemplateSpec>,
}

impl CronJobSpec {
    pub fn pod_spec(&self) -> Option<&PodSpec> {
        self.job_template.as_ref()?.spec.as_ref()?.pod_spec()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobTemplateSpec {
    #[serde(default)]
    pub spec: Option<TemplateSpec>,
}

pub type Deployment = Manifest<TemplateSpec>;
pub type StatefulSet = Manifest<TemplateSpec>;
pub type DaemonSet = Manifest<TemplateSpec>;
pub type ReplicaSet = Manifest<TemplateSpec>;
pub type Job = Manifest<TemplateSpec>;
pub type CronJob = Manifest<CronJobSpec>;
pub type Pod = Manifest<PodSpec>;

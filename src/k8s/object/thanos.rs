//! banzaicloud thanos-operator resources (monitoring.banzaicloud.io/v1alpha1).

use super::{Manifest, PodSpec, TemplateOverride, null_as_default};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThanosSpec {
    #[serde(default)]
    pub rule: Option<ThanosRule>,
    #[serde(default)]
    pub query: Option<ThanosComponent>,
    #[serde(default)]
    pub store_gateway: Option<ThanosComponent>,
    #[serde(default)]
    pub query_frontend: Option<ThanosComponent>,
}

impl ThanosSpec {
    /// Pod specs of the rule, query, store-gateway and query-frontend
    /// components, in that order. Absent components yield `None`.
    pub fn pod_specs(&self) -> [Option<&PodSpec>; 4] {
        [
            self.rule.as_ref().and_then(ThanosRule::pod_spec),
            self.query.as_ref().and_then(ThanosComponent::pod_spec),
            self.store_gateway.as_ref().and_then(ThanosComponent::pod_spec),
            self.query_frontend.as_ref().and_then(ThanosComponent::pod_spec),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThanosRule {
    #[serde(default, rename = "statefulsetOverrides", alias = "statefulSetOverrides")]
    pub statefulset_overrides: Option<TemplateOverride>,
}

impl ThanosRule {
    pub fn pod_spec(&self) -> Option<&PodSpec> {
        self.statefulset_overrides.as_ref()?.pod_spec()
    }
}

/// A Deployment-backed component (query, store gateway, query frontend).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThanosComponent {
    #[serde(default)]
    pub deployment_overrides: Option<TemplateOverride>,
}

impl ThanosComponent {
    pub fn pod_spec(&self) -> Option<&PodSpec> {
        self.deployment_overrides.as_ref()?.pod_spec()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub receiver_groups: Vec<ReceiverGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverGroup {
    #[serde(default, alias = "statefulsetOverrides")]
    pub stateful_set_overrides: Option<TemplateOverride>,
}

impl ReceiverGroup {
    pub fn pod_spec(&self) -> Option<&PodSpec> {
        self.stateful_set_overrides.as_ref()?.pod_spec()
    }
}

pub type Thanos = Manifest<ThanosSpec>;
pub type ThanosReceiver = Manifest<ReceiverSpec>;

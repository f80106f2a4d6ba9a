//! grafana-operator Grafana resource (grafana.integreatly.org/v1beta1).

use super::{Manifest, TemplateOverride};
use serde::Deserialize;

/// apiVersion of the pre-v5 operator, whose spec layout is not supported.
pub const LEGACY_API_VERSION: &str = "integreatly.org/v1alpha1";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrafanaSpec {
    #[serde(default)]
    pub deployment: Option<TemplateOverride>,
}

pub type Grafana = Manifest<GrafanaSpec>;

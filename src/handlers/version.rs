use crate::helm;
use serde::Serialize;

/// Build metadata printed by `helm-images version`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub package: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm: Option<String>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: crate::VERSION,
            package: env!("CARGO_PKG_NAME"),
            helm: helm::helm_version(),
        }
    }
}

pub fn handle_version() -> crate::Result<()> {
    let info = serde_json::to_string(&BuildInfo::current())?;
    println!("images version: {}", info);
    Ok(())
}

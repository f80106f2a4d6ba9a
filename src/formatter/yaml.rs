//! YAML formatter.

use crate::images::ImageReport;

/// Format a report as YAML.
pub fn format(report: &ImageReport) -> crate::Result<String> {
    Ok(serde_yaml::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s::{ImageRecord, ResourceKind};

    #[test]
    fn test_records_as_yaml() {
        let report = ImageReport::Records(vec![ImageRecord::new(
            ResourceKind::Deployment,
            "web",
            vec!["nginx:1.25".to_string()],
        )]);
        let out = format(&report).unwrap();
        assert!(out.contains("kind: Deployment"));
        assert!(out.contains("- nginx:1.25"));
    }
}

//! JSON formatter.

use crate::images::ImageReport;

/// Format a report as pretty-printed JSON.
pub fn format(report: &ImageReport) -> crate::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

//! Output formatters for extracted images.

pub mod json;
pub mod plain;
pub mod table;
pub mod yaml;

use crate::images::ImageReport;
use serde::{Deserialize, Serialize};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One image per line.
    #[default]
    Plain,
    /// JSON output.
    Json,
    /// YAML output.
    Yaml,
    /// Aligned kind/name/image table.
    Table,
}

impl OutputFormat {
    /// Parse from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" | "list" => Some(Self::Plain),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "table" => Some(Self::Table),
            _ => None,
        }
    }
}

/// Format a report to a string.
pub fn format_report(report: &ImageReport, format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain::format(report)),
        OutputFormat::Json => json::format(report),
        OutputFormat::Yaml => yaml::format(report),
        OutputFormat::Table => Ok(table::format(report)),
    }
}

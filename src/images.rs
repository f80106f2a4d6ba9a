//! Image collection over a whole rendered chart.
//!
//! Splits multi-document manifest text, dispatches each document to its
//! extractor, and applies the caller-level policies from [`ImagesConfig`]:
//! kind filtering, registry filtering and deduplication.

use crate::config::ImagesConfig;
use crate::k8s::{ImageRecord, ResourceKind, resolve_kind};
use serde::Serialize;
use std::collections::BTreeSet;

/// The result of an images run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImageReport {
    /// One record per manifest that referenced images
    Records(Vec<ImageRecord>),
    /// Deduplicated, sorted images across all manifests
    Unique(Vec<String>),
}

impl ImageReport {
    /// Every image in the report, in report order.
    pub fn images(&self) -> Vec<&str> {
        match self {
            Self::Records(records) => records
                .iter()
                .flat_map(|r| r.images.iter().map(String::as_str))
                .collect(),
            Self::Unique(images) => images.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Records(records) => records.is_empty(),
            Self::Unique(images) => images.is_empty(),
        }
    }
}

/// Split manifest text into its YAML documents.
///
/// A line consisting of `---` (optionally followed by a comment or
/// whitespace) starts a new document. Documents that are blank after
/// splitting are dropped.
pub fn split_documents(content: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if is_document_separator(line) {
            push_document(&mut documents, &mut current);
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    push_document(&mut documents, &mut current);

    log::trace!("split manifest into {} document(s)", documents.len());
    documents
}

fn is_document_separator(line: &str) -> bool {
    match line.strip_prefix("---") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}

fn push_document(documents: &mut Vec<String>, current: &mut String) {
    let doc = std::mem::take(current);
    if !doc.trim().is_empty() {
        documents.push(doc);
    }
}

/// Extract image records from every supported document in `manifests`.
///
/// Empty documents, unsupported kinds and kinds outside the configured
/// filter are skipped. The first extraction error aborts the run.
pub fn collect_records(manifests: &str, config: &ImagesConfig) -> crate::Result<Vec<ImageRecord>> {
    let enabled = config.enabled_kinds();
    let mut records = Vec::new();

    for doc in split_documents(manifests) {
        let tag = resolve_kind(&doc)?;
        if tag.is_empty() {
            log::debug!("skipping manifest without a kind");
            continue;
        }

        let Some(kind) = ResourceKind::from_kind(&tag) else {
            log::debug!(
                "either kind '{}' is not supported at the moment or the manifest has no images",
                tag
            );
            continue;
        };
        if !enabled.contains(&kind) {
            log::debug!("skipping kind '{}', excluded by the kind filter", kind);
            continue;
        }

        records.push(kind.extract(&doc)?);
    }

    Ok(records)
}

/// Keep only images that pass the registry filter; records left without
/// images are dropped.
pub fn filter_registries(records: Vec<ImageRecord>, config: &ImagesConfig) -> Vec<ImageRecord> {
    if config.registries.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter_map(|mut record| {
            record.images.retain(|image| config.matches_registry(image));
            (!record.images.is_empty()).then_some(record)
        })
        .collect()
}

/// Flatten records into a sorted list of distinct images.
pub fn unique_images(records: &[ImageRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.images.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Run the full pipeline over rendered manifest text.
pub fn collect_images(manifests: &str, config: &ImagesConfig) -> crate::Result<ImageReport> {
    let records = filter_registries(collect_records(manifests, config)?, config);
    log::debug!("collected images from {} manifest(s)", records.len());

    if config.unique {
        Ok(ImageReport::Unique(unique_images(&records)))
    } else {
        Ok(ImageReport::Records(records))
    }
}

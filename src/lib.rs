//! # helm-images
//!
//! Lists every container image a Helm chart or release would deploy.
//!
//! The [`k8s`] module holds the extraction core: it resolves the kind of a
//! rendered manifest document and walks the kind's typed shape to collect
//! image references, including images hidden in environment variables,
//! init containers and operator custom resources. [`images`] runs that core
//! over a whole rendered chart and applies filtering and deduplication.
//!
//! ## Example
//!
//! ```rust
//! use helm_images::{ImagesConfig, collect_images};
//!
//! let rendered = r#"
//! ---
//! apiVersion: v1
//! kind: Pod
//! metadata:
//!   name: debug
//! spec:
//!   containers:
//!   - name: shell
//!     image: busybox:1.36
//! "#;
//!
//! let report = collect_images(rendered, &ImagesConfig::default()).unwrap();
//! assert_eq!(report.images(), vec!["busybox:1.36"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod handlers;
pub mod helm;
pub mod images;
pub mod k8s;

pub use config::ImagesConfig;
pub use error::{ImagesError, Result};
pub use images::{ImageReport, collect_images};
pub use k8s::{ExtractError, ImageRecord, ResourceKind, resolve_kind, supported_kinds};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

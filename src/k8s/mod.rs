//! Image extraction from rendered Kubernetes manifests.
//!
//! Each manifest document goes through two steps:
//!
//! 1. [`resolve_kind`] reads the top-level `kind` from an untyped mapping.
//! 2. [`ResourceKind::extract`] decodes the document into the typed shape of
//!    that kind and walks it into an [`ImageRecord`].
//!
//! # Example
//!
//! ```rust
//! use helm_images::k8s::{ResourceKind, resolve_kind};
//!
//! let manifest = r#"
//! apiVersion: apps/v1
//! kind: Deployment
//! metadata:
//!   name: web
//! spec:
//!   template:
//!     spec:
//!       containers:
//!       - name: web
//!         image: nginx:1.25
//! "#;
//!
//! let kind = resolve_kind(manifest).unwrap();
//! let record = ResourceKind::from_kind(&kind).unwrap().extract(manifest).unwrap();
//! assert_eq!(record.images, vec!["nginx:1.25"]);
//! ```
//!
//! # Supported kinds
//!
//! | Group | Kinds |
//! |-------|-------|
//! | Workloads | Deployment, StatefulSet, DaemonSet, CronJob, Job, ReplicaSet, Pod |
//! | Config | ConfigMap (keys containing `image`) |
//! | prometheus-operator | Alertmanager, Prometheus, ThanosRuler |
//! | grafana-operator | Grafana (v1beta1 only) |
//! | thanos-operator | Thanos, Receiver |

pub mod containers;
pub mod error;
pub mod extract;
pub mod kind;
pub mod object;
pub mod record;

pub use error::ExtractError;
pub use extract::extract;
pub use kind::{ResourceKind, resolve_kind, supported_kinds};
pub use record::ImageRecord;

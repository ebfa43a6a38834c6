//! Posture Domain Layer
//!
//! This crate contains the maturity scoring and framework-aggregation engine.
//! It performs no I/O: every function takes complete, immutable snapshots and
//! returns freshly built result structures, so it is safe to call from any
//! number of callers at once.
//!
//! ## Key Concepts
//!
//! - **Safeguard**: the smallest assessable unit of a framework
//! - **Group**: a control family / domain / category of safeguards
//! - **Dual-axis assessment**: a policy status plus an implementation status
//! - **Maturity level**: 0 (Not Addressed) through 5 (Optimizing)
//! - **Crosswalk**: static tables mapping inventory taxonomies onto group ids
//! - **Override**: a human-entered level that supersedes computed ones
//!
//! ## Data Flow
//!
//! ```text
//! assessments ─► score_safeguard ─► aggregate_group ─► classify ─┐
//! inventory ─► Crosswalk::build_mapping ─► derive_maturity ──────┼─► resolve_maturity
//! overrides ─────────────────────────────────────────────────────┘
//! ```
//!
//! Catalogs and crosswalks are explicit configuration objects, validated once
//! when they are built; the scoring functions themselves never fail.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregation;
pub mod assessment;
pub mod catalog;
pub mod crosswalk;
pub mod error;
pub mod estimate;
pub mod inventory;
pub mod maturity;
pub mod resolution;
pub mod scoring;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use aggregation::{
    aggregate_framework, aggregate_group, FrameworkResult, GroupResult, GroupScore, OverallResult,
};
pub use assessment::{AssessmentSnapshot, Override, SafeguardAssessment, SafeguardUpdate};
pub use catalog::{is_in_tier, FrameworkCatalog, Group, GroupSpec, Safeguard};
pub use crosswalk::Crosswalk;
pub use error::CatalogError;
pub use estimate::derive_maturity;
pub use inventory::InventoryObject;
pub use maturity::{classify, MaturityLevel};
pub use resolution::{effective_maturity, resolve_maturity, EffectiveMaturity, MaturitySource};
pub use scoring::score_safeguard;
pub use status::{ImplementationStatus, PolicyStatus, StatusDefinition};

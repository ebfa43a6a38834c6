//! Posture Engine
//!
//! Loads framework definitions and evaluates assessment snapshots plus
//! inventory into serializable posture reports.
//!
//! The engine provides:
//! - Framework definition loading from TOML with fail-fast validation
//! - Tier-filtered aggregation of safeguard assessments
//! - Inventory-based maturity estimates for unassessed groups
//! - Override-aware maturity resolution with provenance
//!
//! # Examples
//!
//! ```no_run
//! use posture_domain::AssessmentSnapshot;
//! use posture_engine::{EngineConfig, FrameworkDefinition, PostureEngine};
//!
//! let framework = FrameworkDefinition::load("frameworks/cis-v8.toml")?;
//! let engine = PostureEngine::new(framework, EngineConfig::tiered(1));
//!
//! let report = engine.evaluate(&AssessmentSnapshot::new(), &[]);
//! println!("{} -> {}", report.framework_name, report.overall.maturity);
//! # Ok::<(), posture_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod framework;
mod report;

pub use config::EngineConfig;
pub use engine::{evaluate_all, PostureEngine};
pub use error::EngineError;
pub use framework::FrameworkDefinition;
pub use report::{GroupReport, PostureReport};

//! Configuration for posture evaluation
//!
//! Controls which rollout tier is in scope and whether inventory evidence
//! may stand in for missing assessments.

use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the posture engine
///
/// # Examples
///
/// ```
/// use posture_engine::EngineConfig;
///
/// // Every safeguard in scope, estimator enabled
/// let config = EngineConfig::default();
/// assert_eq!(config.tier_filter, None);
///
/// // Only tier-1 safeguards
/// let config = EngineConfig::tiered(1);
/// assert_eq!(config.tier_filter, Some(1));
///
/// // Ignore inventory evidence
/// let config = EngineConfig::assessed_only();
/// assert!(!config.auto_estimate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Highest rollout tier in scope; `None` includes every safeguard
    #[serde(default)]
    pub tier_filter: Option<u8>,

    /// Derive a conservative maturity from inventory for unassessed groups.
    /// When disabled the estimate is always level 0.
    /// Default: true
    #[serde(default = "default_auto_estimate")]
    pub auto_estimate: bool,
}

fn default_auto_estimate() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tier_filter: None,
            auto_estimate: true,
        }
    }
}

impl EngineConfig {
    /// Restrict evaluation to safeguards whose lowest tier is at most `tier`
    pub fn tiered(tier: u8) -> Self {
        Self {
            tier_filter: Some(tier),
            ..Self::default()
        }
    }

    /// Score from assessments and overrides only
    pub fn assessed_only() -> Self {
        Self {
            tier_filter: None,
            auto_estimate: false,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.tier_filter == Some(0) {
            return Err(EngineError::Config("tier_filter must be at least 1".to_string()));
        }
        Ok(())
    }
}

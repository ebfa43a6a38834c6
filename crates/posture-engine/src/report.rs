//! Posture report payload
//!
//! The report is the hand-off to presentation layers: plain data, ordered
//! like the catalog, serializable with serde.

use posture_domain::{GroupResult, MaturityLevel, MaturitySource, OverallResult};
use serde::{Deserialize, Serialize};

/// Evaluation result for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupReport {
    /// Group id
    pub group_id: String,
    /// Group display name
    pub name: String,
    /// Safeguard-derived aggregate
    pub result: GroupResult,
    /// Inventory-based estimate
    pub auto_maturity: MaturityLevel,
    /// Manual override level, clamped, if one is set
    pub override_level: Option<MaturityLevel>,
    /// Maturity after precedence resolution
    pub effective: MaturityLevel,
    /// Which signal `effective` came from
    pub source: MaturitySource,
    /// Ids of inventory objects mapped to this group, in inventory order
    pub mapped_objects: Vec<String>,
}

/// Evaluation result for one framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureReport {
    /// Framework id
    pub framework_id: String,
    /// Framework display name
    pub framework_name: String,
    /// Tier filter the report was computed with
    pub tier_filter: Option<u8>,
    /// Framework roll-up
    pub overall: OverallResult,
    /// Per-group results in catalog order
    pub groups: Vec<GroupReport>,
}

impl PostureReport {
    /// Report for one group
    pub fn group(&self, group_id: &str) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.group_id == group_id)
    }

    /// Number of groups whose effective maturity came from `source`
    pub fn count_by_source(&self, source: MaturitySource) -> usize {
        self.groups.iter().filter(|g| g.source == source).count()
    }

    /// Fraction of applicable safeguards assessed across the framework
    pub fn completion(&self) -> Option<f64> {
        (self.overall.total_safeguards > 0)
            .then(|| self.overall.assessed_count as f64 / self.overall.total_safeguards as f64)
    }
}

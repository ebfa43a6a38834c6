//! Assessment and override records
//!
//! These are owned by the store collaborator; the engine only reads them
//! through an [`AssessmentSnapshot`].

use crate::maturity::MaturityLevel;
use crate::scoring::score_safeguard;
use crate::status::NOT_APPLICABLE_ID;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Analyst-entered dual-axis assessment of one safeguard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SafeguardAssessment {
    /// Assessed safeguard
    pub safeguard_id: String,
    /// Policy status id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_status: Option<String>,
    /// Implementation status id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_status: Option<String>,
    /// Free-text analyst note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Last write, seconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl SafeguardAssessment {
    /// Create an assessment record with both axes set
    pub fn new(
        safeguard_id: impl Into<String>,
        policy_status: Option<&str>,
        implementation_status: Option<&str>,
    ) -> Self {
        Self {
            safeguard_id: safeguard_id.into(),
            policy_status: policy_status.map(str::to_string),
            implementation_status: implementation_status.map(str::to_string),
            note: None,
            updated_at: None,
        }
    }

    /// Whether at least one axis carries a status
    pub fn is_assessed(&self) -> bool {
        let set = |axis: &Option<String>| axis.as_deref().is_some_and(|id| !id.trim().is_empty());
        set(&self.policy_status) || set(&self.implementation_status)
    }

    /// Whether both axes are explicitly marked not applicable
    ///
    /// Such a safeguard is removed from the group's applicable total rather
    /// than being treated as unassessed.
    pub fn is_excluded(&self) -> bool {
        let not_applicable =
            |axis: &Option<String>| axis.as_deref().map(str::trim) == Some(NOT_APPLICABLE_ID);
        not_applicable(&self.policy_status) && not_applicable(&self.implementation_status)
    }

    /// Score of this assessment, `None` when unscored
    pub fn score(&self) -> Option<f64> {
        score_safeguard(self.policy_status.as_deref(), self.implementation_status.as_deref())
    }

    /// Apply a write intent: provided fields overwrite, omitted fields stay
    ///
    /// An empty string clears an axis back to "no status".
    pub fn apply(&mut self, update: &SafeguardUpdate, timestamp: u64) {
        if let Some(policy) = &update.policy_status {
            self.policy_status = Some(policy.clone()).filter(|p| !p.is_empty());
        }
        if let Some(implementation) = &update.implementation_status {
            self.implementation_status = Some(implementation.clone()).filter(|i| !i.is_empty());
        }
        if let Some(note) = &update.note {
            self.note = Some(note.clone()).filter(|n| !n.is_empty());
        }
        self.updated_at = Some(timestamp);
    }
}

/// Write intent for one safeguard (UI edit or bulk-applied suggestion)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SafeguardUpdate {
    /// Target safeguard
    pub safeguard_id: String,
    /// New policy status id
    #[serde(default)]
    pub policy_status: Option<String>,
    /// New implementation status id
    #[serde(default)]
    pub implementation_status: Option<String>,
    /// New note
    #[serde(default)]
    pub note: Option<String>,
}

impl SafeguardUpdate {
    /// Update both axes of a safeguard
    pub fn statuses(
        safeguard_id: impl Into<String>,
        policy_status: impl Into<String>,
        implementation_status: impl Into<String>,
    ) -> Self {
        Self {
            safeguard_id: safeguard_id.into(),
            policy_status: Some(policy_status.into()),
            implementation_status: Some(implementation_status.into()),
            note: None,
        }
    }
}

/// Human-entered maturity level for a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    /// Target group
    pub group_id: String,
    /// Raw level as entered; clamped into 0..=5 when read
    pub level: i64,
    /// Justification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When the override was set, seconds since the Unix epoch
    pub created_at: u64,
}

impl Override {
    /// Create an override
    pub fn new(group_id: impl Into<String>, level: i64, created_at: u64) -> Self {
        Self {
            group_id: group_id.into(),
            level,
            note: None,
            created_at,
        }
    }

    /// Level clamped into the valid range
    pub fn maturity(&self) -> MaturityLevel {
        MaturityLevel::from_level(self.level)
    }
}

/// Point-in-time view of every assessment and override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    /// Assessments keyed by safeguard id
    #[serde(default)]
    pub assessments: HashMap<String, SafeguardAssessment>,
    /// Overrides keyed by group id
    #[serde(default)]
    pub overrides: HashMap<String, Override>,
}

impl AssessmentSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from record lists, later records winning on conflicts
    pub fn from_records(
        assessments: impl IntoIterator<Item = SafeguardAssessment>,
        overrides: impl IntoIterator<Item = Override>,
    ) -> Self {
        Self {
            assessments: assessments
                .into_iter()
                .map(|a| (a.safeguard_id.clone(), a))
                .collect(),
            overrides: overrides
                .into_iter()
                .map(|o| (o.group_id.clone(), o))
                .collect(),
        }
    }

    /// Assessment for a safeguard
    pub fn assessment(&self, safeguard_id: &str) -> Option<&SafeguardAssessment> {
        self.assessments.get(safeguard_id)
    }

    /// Override for a group
    pub fn override_for(&self, group_id: &str) -> Option<&Override> {
        self.overrides.get(group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_assessed() {
        assert!(!SafeguardAssessment::new("1.1", None, None).is_assessed());
        assert!(!SafeguardAssessment::new("1.1", Some(""), None).is_assessed());
        assert!(SafeguardAssessment::new("1.1", None, Some("all_systems")).is_assessed());
    }

    #[test]
    fn test_is_excluded_needs_both_axes() {
        let na = Some("not_applicable");
        assert!(SafeguardAssessment::new("1.1", na, na).is_excluded());
        assert!(!SafeguardAssessment::new("1.1", na, None).is_excluded());
        assert!(!SafeguardAssessment::new("1.1", na, Some("all_systems")).is_excluded());
    }

    #[test]
    fn test_apply_overwrites_only_provided_fields() {
        let mut record = SafeguardAssessment::new("1.1", Some("written"), Some("some_systems"));
        let update = SafeguardUpdate {
            safeguard_id: "1.1".to_string(),
            implementation_status: Some("all_systems".to_string()),
            ..Default::default()
        };

        record.apply(&update, 42);

        assert_eq!(record.policy_status.as_deref(), Some("written"));
        assert_eq!(record.implementation_status.as_deref(), Some("all_systems"));
        assert_eq!(record.updated_at, Some(42));
    }

    #[test]
    fn test_apply_empty_string_clears_axis() {
        let mut record = SafeguardAssessment::new("1.1", Some("written"), None);
        let update = SafeguardUpdate {
            safeguard_id: "1.1".to_string(),
            policy_status: Some(String::new()),
            ..Default::default()
        };

        record.apply(&update, 7);

        assert_eq!(record.policy_status, None);
        assert!(!record.is_assessed());
    }

    #[test]
    fn test_override_clamps() {
        assert_eq!(Override::new("1", 9, 0).maturity(), MaturityLevel::Optimizing);
        assert_eq!(Override::new("1", -2, 0).maturity(), MaturityLevel::NotAddressed);
        assert_eq!(Override::new("1", 3, 0).maturity(), MaturityLevel::Defined);
    }

    #[test]
    fn test_snapshot_later_records_win() {
        let snapshot = AssessmentSnapshot::from_records(
            vec![
                SafeguardAssessment::new("1.1", Some("no_policy"), None),
                SafeguardAssessment::new("1.1", Some("written"), None),
            ],
            vec![Override::new("1", 2, 0), Override::new("1", 4, 1)],
        );

        assert_eq!(snapshot.assessment("1.1").unwrap().policy_status.as_deref(), Some("written"));
        assert_eq!(snapshot.override_for("1").unwrap().level, 4);
        assert!(snapshot.override_for("2").is_none());
    }
}

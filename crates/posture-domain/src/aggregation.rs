//! Group and framework aggregation
//!
//! Folds per-safeguard scores into group scores, then group scores into an
//! overall framework score. Unassessed safeguards and groups are "unknown",
//! never "failing": they stay out of every average.

use crate::assessment::SafeguardAssessment;
use crate::catalog::{is_in_tier, Group, Safeguard};
use crate::maturity::{classify, MaturityLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw aggregate of one group's safeguards
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupScore {
    /// Mean of scored safeguards, 0 when none are scored
    pub score: f64,
    /// Safeguards with a non-null score
    pub assessed_count: usize,
    /// In-tier safeguards minus excluded ones
    pub total_applicable: usize,
    /// Safeguards marked not applicable on both axes
    pub excluded_count: usize,
}

/// Scored and classified group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupResult {
    /// Group id
    pub group_id: String,
    /// Mean safeguard score; only meaningful when `assessed_count > 0`
    pub score: f64,
    /// Safeguards with a non-null score
    pub assessed_count: usize,
    /// Completion denominator
    pub total_applicable: usize,
    /// Safeguards excluded as not applicable
    pub excluded_count: usize,
    /// `classify(score)`
    pub maturity: MaturityLevel,
}

impl GroupResult {
    /// Whether any safeguard in the group carries evidence
    ///
    /// A group with nothing applicable (every safeguard tier-filtered or
    /// excluded) is also not assessed.
    pub fn is_assessed(&self) -> bool {
        self.assessed_count > 0
    }

    /// Fraction of applicable safeguards assessed, `None` when nothing applies
    pub fn completion(&self) -> Option<f64> {
        (self.total_applicable > 0)
            .then(|| self.assessed_count as f64 / self.total_applicable as f64)
    }
}

/// Framework-wide roll-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    /// Mean score over assessed groups only
    pub score: f64,
    /// `classify(score)`
    pub maturity: MaturityLevel,
    /// Sum of assessed safeguards over all groups
    pub assessed_count: usize,
    /// Sum of applicable safeguards over all groups
    pub total_safeguards: usize,
}

/// Result of aggregating a whole framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkResult {
    /// One entry per group, in catalog order
    pub groups: Vec<GroupResult>,
    /// Roll-up
    pub overall: OverallResult,
}

impl FrameworkResult {
    /// Result for one group
    pub fn group(&self, group_id: &str) -> Option<&GroupResult> {
        self.groups.iter().find(|g| g.group_id == group_id)
    }
}

/// Aggregate a group's safeguards
///
/// Safeguards outside the tier filter are ignored entirely. Safeguards with
/// no record are not yet assessed and only count toward `total_applicable`.
/// A record marked not applicable on both axes counts as excluded.
pub fn aggregate_group(
    safeguards: &[Safeguard],
    assessments: &HashMap<String, SafeguardAssessment>,
    tier_filter: Option<u8>,
) -> GroupScore {
    let mut in_tier = 0usize;
    let mut excluded_count = 0usize;
    let mut assessed_count = 0usize;
    let mut sum = 0.0;

    for safeguard in safeguards.iter().filter(|s| is_in_tier(s, tier_filter)) {
        in_tier += 1;

        let Some(assessment) = assessments.get(&safeguard.id) else {
            continue;
        };

        match assessment.score() {
            Some(score) => {
                assessed_count += 1;
                sum += score;
            }
            None if assessment.is_excluded() => excluded_count += 1,
            None => {}
        }
    }

    let score = if assessed_count > 0 {
        sum / assessed_count as f64
    } else {
        0.0
    };

    GroupScore {
        score,
        assessed_count,
        total_applicable: in_tier - excluded_count,
        excluded_count,
    }
}

/// Aggregate every group of a framework and roll them up
///
/// The overall score averages only groups with at least one assessed
/// safeguard; the counts are plain sums across all groups.
pub fn aggregate_framework(
    groups: &[Group],
    assessments: &HashMap<String, SafeguardAssessment>,
    tier_filter: Option<u8>,
) -> FrameworkResult {
    let results: Vec<GroupResult> = groups
        .iter()
        .map(|group| {
            let aggregate = aggregate_group(&group.safeguards, assessments, tier_filter);
            GroupResult {
                group_id: group.id.clone(),
                score: aggregate.score,
                assessed_count: aggregate.assessed_count,
                total_applicable: aggregate.total_applicable,
                excluded_count: aggregate.excluded_count,
                maturity: classify(aggregate.score),
            }
        })
        .collect();

    let assessed: Vec<f64> = results
        .iter()
        .filter(|g| g.is_assessed())
        .map(|g| g.score)
        .collect();

    let score = if assessed.is_empty() {
        0.0
    } else {
        assessed.iter().sum::<f64>() / assessed.len() as f64
    };

    let overall = OverallResult {
        score,
        maturity: classify(score),
        assessed_count: results.iter().map(|g| g.assessed_count).sum(),
        total_safeguards: results.iter().map(|g| g.total_applicable).sum(),
    };

    FrameworkResult { groups: results, overall }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::status::{ImplementationStatus, PolicyStatus};
    use proptest::prelude::*;

    type StatusPair = (Option<PolicyStatus>, Option<ImplementationStatus>);

    fn record() -> impl Strategy<Value = Option<StatusPair>> {
        proptest::option::of((
            proptest::option::of(proptest::sample::select(PolicyStatus::ALL.to_vec())),
            proptest::option::of(proptest::sample::select(ImplementationStatus::ALL.to_vec())),
        ))
    }

    proptest! {
        /// Property: counts respect assessed <= applicable <= safeguards
        #[test]
        fn test_count_invariants(
            records in proptest::collection::vec(record(), 0..12),
            tier in proptest::option::of(1u8..4),
        ) {
            let safeguards: Vec<Safeguard> = (0..records.len())
                .map(|i| {
                    Safeguard::new(format!("s{}", i), "s", "g").with_tiers([(i % 3) as u8 + 1])
                })
                .collect();
            let map: HashMap<String, SafeguardAssessment> = records
                .iter()
                .enumerate()
                .filter_map(|(i, r)| r.map(|(p, s)| {
                    let id = format!("s{}", i);
                    (id.clone(), SafeguardAssessment::new(id, p.map(|p| p.id()), s.map(|s| s.id())))
                }))
                .collect();

            let result = aggregate_group(&safeguards, &map, tier);

            prop_assert!(result.assessed_count <= result.total_applicable);
            prop_assert!(result.total_applicable <= safeguards.len());
            prop_assert!((0.0..=1.0).contains(&result.score));
        }
    }
}

//! Safeguard scorer
//!
//! Combines one policy status and one implementation status into a single
//! score in [0, 1]. Implementation is weighted above policy: deployed controls
//! reduce risk, documented intent alone does not.

use crate::status::{ImplementationStatus, PolicyStatus};

/// Weight of the policy axis in the blended score
pub const POLICY_WEIGHT: f64 = 0.4;

/// Weight of the implementation axis in the blended score
pub const IMPLEMENTATION_WEIGHT: f64 = 0.6;

/// Resolved value of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
enum Axis {
    /// No status recorded
    Absent,
    /// Explicitly not applicable
    NotApplicable,
    /// Concrete weight (unknown ids resolve to 0)
    Value(f64),
}

fn resolve_axis(id: Option<&str>, lookup: impl Fn(&str) -> Option<Option<f64>>) -> Axis {
    let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
        return Axis::Absent;
    };

    match lookup(id) {
        Some(Some(value)) => Axis::Value(value),
        Some(None) => Axis::NotApplicable,
        // Unrecognized ids never inflate a score
        None => Axis::Value(0.0),
    }
}

/// Score one safeguard from its raw status ids
///
/// Returns `None` (unscored) when both axes are empty, both are not
/// applicable, or one is not applicable and the other empty. When exactly one
/// axis is not applicable, the other axis's value is the score on its own.
/// Otherwise the axes are blended 40/60, with an empty axis counting as 0.
pub fn score_safeguard(policy_id: Option<&str>, implementation_id: Option<&str>) -> Option<f64> {
    let policy = resolve_axis(policy_id, |id| PolicyStatus::from_id(id).map(|s| s.value()));
    let implementation = resolve_axis(implementation_id, |id| {
        ImplementationStatus::from_id(id).map(|s| s.value())
    });

    match (policy, implementation) {
        (Axis::Absent | Axis::NotApplicable, Axis::Absent | Axis::NotApplicable) => None,
        (Axis::Value(value), Axis::NotApplicable) | (Axis::NotApplicable, Axis::Value(value)) => {
            Some(value)
        }
        (policy, implementation) => {
            let weight_of = |axis: Axis| match axis {
                Axis::Value(value) => value,
                _ => 0.0,
            };
            Some(
                weight_of(policy) * POLICY_WEIGHT
                    + weight_of(implementation) * IMPLEMENTATION_WEIGHT,
            )
        }
    }
}

/// Score one safeguard from typed statuses
pub fn score_statuses(
    policy: Option<PolicyStatus>,
    implementation: Option<ImplementationStatus>,
) -> Option<f64> {
    score_safeguard(policy.map(|s| s.id()), implementation.map(|s| s.id()))
}

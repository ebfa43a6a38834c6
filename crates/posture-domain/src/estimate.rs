//! Conservative auto-maturity estimate from inventory metadata
//!
//! Inventory presence cannot show enterprise-wide, standardized or measured
//! practice, so the estimate never exceeds [`MaturityLevel::ESTIMATE_CAP`].
//! Levels 3-5 need safeguard-level evidence or a manual override.

use crate::inventory::InventoryObject;
use crate::maturity::MaturityLevel;

/// Estimate a group's maturity from the objects mapped to it
///
/// - 0 when nothing is mapped
/// - 2 when some object is formally classified and some object (not
///   necessarily the same one) has a measured, non-zero compliance figure
/// - 1 otherwise
pub fn derive_maturity(mapped_objects: &[&InventoryObject]) -> MaturityLevel {
    if mapped_objects.is_empty() {
        return MaturityLevel::NotAddressed;
    }

    let classified = mapped_objects.iter().any(|o| o.is_formally_classified);
    let measured = mapped_objects.iter().any(|o| o.has_measured_compliance());

    if classified && measured {
        MaturityLevel::ESTIMATE_CAP
    } else {
        MaturityLevel::Initial
    }
}

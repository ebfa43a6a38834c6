//! Effective maturity resolution
//!
//! Precedence, strictly in order: manual override, safeguard-derived
//! maturity (only when the group has assessed safeguards), then the
//! inventory estimate.

use crate::aggregation::GroupResult;
use crate::assessment::Override;
use crate::maturity::MaturityLevel;
use serde::{Deserialize, Serialize};

/// Which signal produced the effective maturity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturitySource {
    /// A human override
    Override,
    /// Safeguard-level assessments
    Assessed,
    /// The inventory-based estimate
    Estimated,
}

impl MaturitySource {
    /// Source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MaturitySource::Override => "override",
            MaturitySource::Assessed => "assessed",
            MaturitySource::Estimated => "estimated",
        }
    }
}

/// Effective maturity with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveMaturity {
    /// Resolved level
    pub level: MaturityLevel,
    /// Signal it came from
    pub source: MaturitySource,
}

/// Resolve a group's maturity and report where it came from
pub fn resolve_maturity(
    group: &GroupResult,
    auto_maturity: MaturityLevel,
    manual: Option<&Override>,
) -> EffectiveMaturity {
    if let Some(manual) = manual {
        return EffectiveMaturity {
            level: manual.maturity(),
            source: MaturitySource::Override,
        };
    }

    if group.is_assessed() {
        return EffectiveMaturity {
            level: group.maturity,
            source: MaturitySource::Assessed,
        };
    }

    EffectiveMaturity {
        level: auto_maturity,
        source: MaturitySource::Estimated,
    }
}

/// Resolve a group's maturity
pub fn effective_maturity(
    group: &GroupResult,
    auto_maturity: MaturityLevel,
    manual: Option<&Override>,
) -> MaturityLevel {
    resolve_maturity(group, auto_maturity, manual).level
}

//! Status vocabularies for the two assessment axes
//!
//! Each vocabulary is closed and ranked from "none" to "fully realized", with
//! exactly one "not applicable" member whose value is `None`. A `None` value
//! means the axis is excluded from scoring, which is different from zero.

use serde::{Deserialize, Serialize};

/// Id shared by the "not applicable" member of both vocabularies
pub const NOT_APPLICABLE_ID: &str = "not_applicable";

/// Plain description of one vocabulary member
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusDefinition {
    /// Stable identifier stored in assessment records
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Weight in [0, 1], or `None` for "not applicable"
    pub value: Option<f64>,
}

/// Documentation/approval status of a safeguard's governing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    /// No policy exists
    NoPolicy,
    /// Practice is followed informally
    Informal,
    /// Policy is partially written down
    PartialWritten,
    /// Policy is written but not formally approved
    Written,
    /// Policy is written and approved
    ApprovedDocumented,
    /// The safeguard does not apply
    NotApplicable,
}

impl PolicyStatus {
    /// Every member, ranked members first in increasing order
    pub const ALL: [PolicyStatus; 6] = [
        PolicyStatus::NoPolicy,
        PolicyStatus::Informal,
        PolicyStatus::PartialWritten,
        PolicyStatus::Written,
        PolicyStatus::ApprovedDocumented,
        PolicyStatus::NotApplicable,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            PolicyStatus::NoPolicy => "no_policy",
            PolicyStatus::Informal => "informal",
            PolicyStatus::PartialWritten => "partial_written",
            PolicyStatus::Written => "written",
            PolicyStatus::ApprovedDocumented => "approved_documented",
            PolicyStatus::NotApplicable => NOT_APPLICABLE_ID,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            PolicyStatus::NoPolicy => "No Policy",
            PolicyStatus::Informal => "Informal Policy",
            PolicyStatus::PartialWritten => "Partial Written Policy",
            PolicyStatus::Written => "Written Policy",
            PolicyStatus::ApprovedDocumented => "Approved Written Policy",
            PolicyStatus::NotApplicable => "Not Applicable",
        }
    }

    /// Scoring weight, `None` for not applicable
    pub fn value(&self) -> Option<f64> {
        match self {
            PolicyStatus::NoPolicy => Some(0.0),
            PolicyStatus::Informal => Some(0.25),
            PolicyStatus::PartialWritten => Some(0.5),
            PolicyStatus::Written => Some(0.75),
            PolicyStatus::ApprovedDocumented => Some(1.0),
            PolicyStatus::NotApplicable => None,
        }
    }

    /// Look up a member by its id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }

    /// Full definition record
    pub fn definition(&self) -> StatusDefinition {
        StatusDefinition {
            id: self.id(),
            label: self.label(),
            value: self.value(),
        }
    }
}

/// Operational deployment status of a safeguard's control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationStatus {
    /// Nothing deployed
    NotImplemented,
    /// Parts of the policy are implemented
    Partially,
    /// Implemented on some systems
    SomeSystems,
    /// Implemented on most systems
    MostSystems,
    /// Implemented on all systems
    AllSystems,
    /// The safeguard does not apply
    NotApplicable,
}

impl ImplementationStatus {
    /// Every member, ranked members first in increasing order
    pub const ALL: [ImplementationStatus; 6] = [
        ImplementationStatus::NotImplemented,
        ImplementationStatus::Partially,
        ImplementationStatus::SomeSystems,
        ImplementationStatus::MostSystems,
        ImplementationStatus::AllSystems,
        ImplementationStatus::NotApplicable,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            ImplementationStatus::NotImplemented => "not_implemented",
            ImplementationStatus::Partially => "partially",
            ImplementationStatus::SomeSystems => "some_systems",
            ImplementationStatus::MostSystems => "most_systems",
            ImplementationStatus::AllSystems => "all_systems",
            ImplementationStatus::NotApplicable => NOT_APPLICABLE_ID,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ImplementationStatus::NotImplemented => "Not Implemented",
            ImplementationStatus::Partially => "Parts of Policy Implemented",
            ImplementationStatus::SomeSystems => "Implemented on Some Systems",
            ImplementationStatus::MostSystems => "Implemented on Most Systems",
            ImplementationStatus::AllSystems => "Implemented on All Systems",
            ImplementationStatus::NotApplicable => "Not Applicable",
        }
    }

    /// Scoring weight, `None` for not applicable
    pub fn value(&self) -> Option<f64> {
        match self {
            ImplementationStatus::NotImplemented => Some(0.0),
            ImplementationStatus::Partially => Some(0.25),
            ImplementationStatus::SomeSystems => Some(0.5),
            ImplementationStatus::MostSystems => Some(0.75),
            ImplementationStatus::AllSystems => Some(1.0),
            ImplementationStatus::NotApplicable => None,
        }
    }

    /// Look up a member by its id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }

    /// Full definition record
    pub fn definition(&self) -> StatusDefinition {
        StatusDefinition {
            id: self.id(),
            label: self.label(),
            value: self.value(),
        }
    }
}

impl std::str::FromStr for PolicyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("Invalid policy status: {}", s))
    }
}

impl std::str::FromStr for ImplementationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("Invalid implementation status: {}", s))
    }
}

//! Configuration-integrity errors
//!
//! Scoring never fails; these are raised only while building catalogs and
//! crosswalks, so a broken configuration is caught before any scoring runs.

use thiserror::Error;

/// Errors raised while building or validating framework configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A safeguard names a group the catalog does not define
    #[error("Safeguard '{safeguard_id}' references unknown group '{group_id}'")]
    UnknownGroup {
        /// Offending safeguard
        safeguard_id: String,
        /// Group id it referenced
        group_id: String,
    },

    /// Two groups share an id
    #[error("Duplicate group id: {0}")]
    DuplicateGroup(String),

    /// Two safeguards share an id
    #[error("Duplicate safeguard id: {0}")]
    DuplicateSafeguard(String),

    /// Applicability tiers must be a non-empty set of positive integers
    #[error("Safeguard '{0}' has invalid applicability tiers (must be non-empty and positive)")]
    InvalidTiers(String),

    /// A crosswalk entry targets a group the catalog does not define
    #[error("Crosswalk entry '{key}' targets unknown group '{group_id}'")]
    UnknownCrosswalkGroup {
        /// Category or classification key
        key: String,
        /// Group id it referenced
        group_id: String,
    },

    /// A crosswalk key is not part of the declared taxonomy
    #[error("Crosswalk key '{0}' is not a declared category or classification")]
    UnknownCategory(String),
}

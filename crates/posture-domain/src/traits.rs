//! Trait definitions for external interactions
//!
//! The engine only computes from records; writes go through a store that
//! lives outside this crate.

use crate::assessment::{AssessmentSnapshot, SafeguardUpdate};

/// Trait for recording assessments and overrides
///
/// Implemented by the infrastructure layer (posture-store). Writes are
/// last-write-wins per safeguard or group.
pub trait AssessmentStore {
    /// Error type for store operations
    type Error;

    /// Record one safeguard assessment, creating it on first write
    fn set_safeguard(&mut self, update: SafeguardUpdate) -> Result<(), Self::Error>;

    /// Record several assessments as one write
    fn set_safeguards_bulk(&mut self, updates: Vec<SafeguardUpdate>) -> Result<usize, Self::Error>;

    /// Set or replace a group override
    fn set_override(
        &mut self,
        group_id: &str,
        level: i64,
        note: Option<String>,
    ) -> Result<(), Self::Error>;

    /// Remove a group override; returns whether one existed
    fn clear_override(&mut self, group_id: &str) -> Result<bool, Self::Error>;

    /// Point-in-time copy of every record
    fn snapshot(&self) -> Result<AssessmentSnapshot, Self::Error>;
}

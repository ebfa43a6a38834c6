//! In-memory assessment store

use crate::{current_timestamp, StoreError};
use posture_domain::traits::AssessmentStore;
use posture_domain::{AssessmentSnapshot, Override, SafeguardAssessment, SafeguardUpdate};
use std::collections::HashMap;
use tracing::debug;

/// `HashMap`-backed store
///
/// Holds records for the lifetime of the process. Snapshots are deep copies,
/// so later writes never leak into a snapshot already handed out.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    assessments: HashMap<String, SafeguardAssessment>,
    overrides: HashMap<String, Override>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing snapshot
    pub fn from_snapshot(snapshot: AssessmentSnapshot) -> Self {
        Self {
            assessments: snapshot.assessments,
            overrides: snapshot.overrides,
        }
    }

    fn apply(&mut self, update: &SafeguardUpdate, timestamp: u64) -> Result<(), StoreError> {
        if update.safeguard_id.trim().is_empty() {
            return Err(StoreError::InvalidData("safeguard id must not be empty".to_string()));
        }

        self.assessments
            .entry(update.safeguard_id.clone())
            .or_insert_with(|| SafeguardAssessment {
                safeguard_id: update.safeguard_id.clone(),
                ..Default::default()
            })
            .apply(update, timestamp);
        Ok(())
    }
}

impl AssessmentStore for MemoryStore {
    type Error = StoreError;

    fn set_safeguard(&mut self, update: SafeguardUpdate) -> Result<(), Self::Error> {
        debug!(safeguard = %update.safeguard_id, "recording assessment");
        self.apply(&update, current_timestamp())
    }

    fn set_safeguards_bulk(&mut self, updates: Vec<SafeguardUpdate>) -> Result<usize, Self::Error> {
        // Validate everything first so a bad entry leaves the store untouched
        if let Some(bad) = updates.iter().find(|u| u.safeguard_id.trim().is_empty()) {
            return Err(StoreError::InvalidData(format!(
                "bulk update contains an empty safeguard id (note: {:?})",
                bad.note
            )));
        }

        let timestamp = current_timestamp();
        for update in &updates {
            self.apply(update, timestamp)?;
        }
        debug!(count = updates.len(), "recorded bulk assessments");
        Ok(updates.len())
    }

    fn set_override(
        &mut self,
        group_id: &str,
        level: i64,
        note: Option<String>,
    ) -> Result<(), Self::Error> {
        if group_id.trim().is_empty() {
            return Err(StoreError::InvalidData("group id must not be empty".to_string()));
        }

        let mut record = Override::new(group_id, level, current_timestamp());
        record.note = note;
        self.overrides.insert(group_id.to_string(), record);
        Ok(())
    }

    fn clear_override(&mut self, group_id: &str) -> Result<bool, Self::Error> {
        Ok(self.overrides.remove(group_id).is_some())
    }

    fn snapshot(&self) -> Result<AssessmentSnapshot, Self::Error> {
        Ok(AssessmentSnapshot {
            assessments: self.assessments.clone(),
            overrides: self.overrides.clone(),
        })
    }
}

//! SQLite-backed assessment store

use crate::{current_timestamp, StoreError};
use posture_domain::traits::AssessmentStore;
use posture_domain::{AssessmentSnapshot, Override, SafeguardAssessment, SafeguardUpdate};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::path::Path;
use tracing::{debug, info};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS assessments (
    safeguard_id          TEXT PRIMARY KEY NOT NULL,
    policy_status         TEXT,
    implementation_status TEXT,
    note                  TEXT,
    updated_at            INTEGER
);

CREATE TABLE IF NOT EXISTS overrides (
    group_id   TEXT PRIMARY KEY NOT NULL,
    level      INTEGER NOT NULL,
    note       TEXT,
    created_at INTEGER NOT NULL
);
";

/// SQLite implementation of `AssessmentStore`
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should open its own
/// `SqliteStore`; snapshots are plain data and can be shared freely.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch(SCHEMA)?;
        info!(path = %path.as_ref().display(), "opened assessment store");
        Ok(Self { conn })
    }

    /// Fetch one assessment record
    pub fn get_assessment(
        &self,
        safeguard_id: &str,
    ) -> Result<Option<SafeguardAssessment>, StoreError> {
        load_assessment(&self.conn, safeguard_id)
    }

    /// Remove every assessment and override
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch("DELETE FROM assessments; DELETE FROM overrides;")?;
        Ok(())
    }

    /// Begin a write transaction holding the database write lock up front
    ///
    /// Read-modify-write upserts run inside it so concurrent writers cannot
    /// interleave between the read and the write.
    fn write_transaction(&mut self) -> Result<rusqlite::Transaction<'_>, StoreError> {
        Ok(self.conn.transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}

fn row_to_assessment(row: &rusqlite::Row<'_>) -> rusqlite::Result<SafeguardAssessment> {
    let updated_at: Option<i64> = row.get(4)?;
    Ok(SafeguardAssessment {
        safeguard_id: row.get(0)?,
        policy_status: row.get(1)?,
        implementation_status: row.get(2)?,
        note: row.get(3)?,
        updated_at: updated_at.map(|t| t as u64),
    })
}

fn load_assessment(
    conn: &Connection,
    safeguard_id: &str,
) -> Result<Option<SafeguardAssessment>, StoreError> {
    let record = conn
        .query_row(
            "SELECT safeguard_id, policy_status, implementation_status, note, updated_at
             FROM assessments WHERE safeguard_id = ?1",
            params![safeguard_id],
            row_to_assessment,
        )
        .optional()?;
    Ok(record)
}

/// Read-modify-write one record so omitted fields keep their stored value
fn upsert_assessment(
    conn: &Connection,
    update: &SafeguardUpdate,
    timestamp: u64,
) -> Result<(), StoreError> {
    if update.safeguard_id.trim().is_empty() {
        return Err(StoreError::InvalidData("safeguard id must not be empty".to_string()));
    }

    let mut record =
        load_assessment(conn, &update.safeguard_id)?.unwrap_or_else(|| SafeguardAssessment {
            safeguard_id: update.safeguard_id.clone(),
            ..Default::default()
        });
    record.apply(update, timestamp);

    conn.execute(
        "INSERT INTO assessments
         (safeguard_id, policy_status, implementation_status, note, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(safeguard_id) DO UPDATE SET
         policy_status = excluded.policy_status,
         implementation_status = excluded.implementation_status,
         note = excluded.note,
         updated_at = excluded.updated_at",
        params![
            &record.safeguard_id,
            &record.policy_status,
            &record.implementation_status,
            &record.note,
            record.updated_at.map(|t| t as i64),
        ],
    )?;
    Ok(())
}

impl AssessmentStore for SqliteStore {
    type Error = StoreError;

    fn set_safeguard(&mut self, update: SafeguardUpdate) -> Result<(), Self::Error> {
        debug!(safeguard = %update.safeguard_id, "recording assessment");
        let tx = self.write_transaction()?;
        upsert_assessment(&tx, &update, current_timestamp())?;
        tx.commit()?;
        Ok(())
    }

    fn set_safeguards_bulk(&mut self, updates: Vec<SafeguardUpdate>) -> Result<usize, Self::Error> {
        let timestamp = current_timestamp();
        let tx = self.write_transaction()?;
        for update in &updates {
            // Dropping the transaction on error rolls everything back
            upsert_assessment(&tx, update, timestamp)?;
        }
        tx.commit()?;
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

        self.conn.execute(
            "INSERT INTO overrides (group_id, level, note, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(group_id) DO UPDATE SET
             level = excluded.level, note = excluded.note, created_at = excluded.created_at",
            params![group_id, level, note, current_timestamp() as i64],
        )?;
        Ok(())
    }

    fn clear_override(&mut self, group_id: &str) -> Result<bool, Self::Error> {
        let removed = self
            .conn
            .execute("DELETE FROM overrides WHERE group_id = ?1", params![group_id])?;
        Ok(removed > 0)
    }

    fn snapshot(&self) -> Result<AssessmentSnapshot, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT safeguard_id, policy_status, implementation_status, note, updated_at
             FROM assessments",
        )?;
        let assessments = stmt
            .query_map([], row_to_assessment)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT group_id, level, note, created_at FROM overrides")?;
        let overrides = stmt
            .query_map([], |row| {
                Ok(Override {
                    group_id: row.get(0)?,
                    level: row.get(1)?,
                    note: row.get(2)?,
                    created_at: row.get::<_, i64>(3)? as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssessmentSnapshot::from_records(assessments, overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_keeps_other_axis() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store
            .set_safeguard(SafeguardUpdate::statuses("1.1", "written", "some_systems"))
            .unwrap();
        store
            .set_safeguard(SafeguardUpdate {
                safeguard_id: "1.1".to_string(),
                note: Some("checked by audit".to_string()),
                ..Default::default()
            })
            .unwrap();

        let record = store.get_assessment("1.1").unwrap().unwrap();
        assert_eq!(record.policy_status.as_deref(), Some("written"));
        assert_eq!(record.implementation_status.as_deref(), Some("some_systems"));
        assert_eq!(record.note.as_deref(), Some("checked by audit"));
    }

    #[test]
    fn test_interleaved_writers_keep_both_axes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posture.db");
        let mut first = SqliteStore::new(&path).unwrap();
        let mut second = SqliteStore::new(&path).unwrap();

        first
            .set_safeguard(SafeguardUpdate {
                safeguard_id: "4.1".to_string(),
                policy_status: Some("written".to_string()),
                ..Default::default()
            })
            .unwrap();
        second
            .set_safeguard(SafeguardUpdate {
                safeguard_id: "4.1".to_string(),
                implementation_status: Some("most_systems".to_string()),
                ..Default::default()
            })
            .unwrap();

        let record = first.get_assessment("4.1").unwrap().unwrap();
        assert_eq!(record.policy_status.as_deref(), Some("written"));
        assert_eq!(record.implementation_status.as_deref(), Some("most_systems"));
    }

    #[test]
    fn test_single_write_waits_for_open_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posture.db");
        let mut store = SqliteStore::new(&path).unwrap();
        store.conn.busy_timeout(std::time::Duration::ZERO).unwrap();

        let mut other = Connection::open(&path).unwrap();
        let tx = other.transaction_with_behavior(TransactionBehavior::Immediate).unwrap();

        // The write lock is taken before the read, so this fails instead of racing
        let result =
            store.set_safeguard(SafeguardUpdate::statuses("1.1", "written", "some_systems"));
        assert!(matches!(result, Err(StoreError::Database(_))));

        tx.rollback().unwrap();
        store
            .set_safeguard(SafeguardUpdate::statuses("1.1", "written", "some_systems"))
            .unwrap();
        assert!(store.get_assessment("1.1").unwrap().is_some());
    }

    #[test]
    fn test_bulk_rolls_back_on_invalid_entry() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let updates = vec![
            SafeguardUpdate::statuses("1.1", "written", "some_systems"),
            SafeguardUpdate::statuses(" ", "written", "some_systems"),
        ];

        assert!(store.set_safeguards_bulk(updates).is_err());
        assert!(store.snapshot().unwrap().assessments.is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store
            .set_safeguard(SafeguardUpdate::statuses("1.1", "written", "some_systems"))
            .unwrap();
        store.set_override("1", 3, None).unwrap();

        store.clear().unwrap();

        let snapshot = store.snapshot().unwrap();
        assert!(snapshot.assessments.is_empty());
        assert!(snapshot.overrides.is_empty());
    }
}

//! Posture Storage Layer
//!
//! Implements the `AssessmentStore` trait for the assessment and override
//! records the engine scores from.
//!
//! # Stores
//!
//! - [`MemoryStore`]: process-local maps, for tests and embedding
//! - [`SqliteStore`]: persistent SQLite database (`:memory:` supported)
//!
//! Both hand out point-in-time [`AssessmentSnapshot`]s, so scoring never
//! observes a half-applied bulk write.
//!
//! # Examples
//!
//! ```no_run
//! use posture_domain::traits::AssessmentStore;
//! use posture_domain::SafeguardUpdate;
//! use posture_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("posture.db")?;
//! store.set_safeguard(SafeguardUpdate::statuses("1.1", "written", "most_systems"))?;
//! let snapshot = store.snapshot()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`AssessmentSnapshot`]: posture_domain::AssessmentSnapshot

#![warn(missing_docs)]

mod error;
mod memory;
mod sqlite;
mod suggestion;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use suggestion::parse_suggestions;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current timestamp in seconds since Unix epoch
pub(crate) fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

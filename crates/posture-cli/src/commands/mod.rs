//! Command implementations.
//!
//! Commands that touch assessments are generic over `AssessmentStore`, so
//! the binary runs them against SQLite while tests use the in-memory store.

pub mod apply;
pub mod assess;
pub mod override_cmd;
pub mod score;
pub mod statuses;
pub mod validate;

pub use self::apply::execute_apply;
pub use self::assess::execute_assess;
pub use self::override_cmd::execute_override;
pub use self::score::execute_score;
pub use self::statuses::execute_statuses;
pub use self::validate::execute_validate;

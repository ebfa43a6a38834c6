//! Override command implementation.

use crate::cli::{OverrideAction, OverrideArgs};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use posture_domain::traits::AssessmentStore;
use posture_domain::MaturityLevel;

/// Execute an override action.
pub fn execute_override<S>(args: OverrideArgs, store: &mut S, formatter: &Formatter) -> Result<()>
where
    S: AssessmentStore,
    CliError: From<S::Error>,
{
    match args.action {
        OverrideAction::Set { group_id, level, note } => {
            let level = check_level(level)?;
            store.set_override(&group_id, level, note)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Override for group {} set to {}",
                    group_id,
                    formatter.maturity(MaturityLevel::from_level(level))
                ))
            );
        }
        OverrideAction::Clear { group_id } => {
            if store.clear_override(&group_id)? {
                let message = format!("Override for group {} cleared", group_id);
                println!("{}", formatter.success(&message));
            } else {
                let message = format!("No override set for group {}", group_id);
                println!("{}", formatter.warning(&message));
            }
        }
    }

    Ok(())
}

/// Levels outside 0-5 are rejected here rather than silently clamped.
fn check_level(level: i64) -> Result<i64> {
    let max = i64::from(MaturityLevel::Optimizing.as_u8());
    if !(0..=max).contains(&level) {
        return Err(CliError::InvalidInput(format!(
            "Override level must be between 0 and {}, got {}",
            max, level
        )));
    }
    Ok(level)
}

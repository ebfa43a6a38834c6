//! Assess command implementation.

use crate::cli::AssessArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use posture_domain::traits::AssessmentStore;
use posture_domain::{ImplementationStatus, PolicyStatus, SafeguardUpdate};

/// Execute the assess command.
pub fn execute_assess<S>(args: AssessArgs, store: &mut S, formatter: &Formatter) -> Result<()>
where
    S: AssessmentStore,
    CliError: From<S::Error>,
{
    let update = build_update(args)?;
    let safeguard_id = update.safeguard_id.clone();

    store.set_safeguard(update)?;

    println!("{}", formatter.success(&format!("Recorded assessment for {}", safeguard_id)));
    Ok(())
}

/// Validate arguments into a write intent.
fn build_update(args: AssessArgs) -> Result<SafeguardUpdate> {
    let safeguard_id = args.safeguard_id.trim().to_string();
    if safeguard_id.is_empty() {
        return Err(CliError::InvalidInput("Safeguard id must not be empty".to_string()));
    }
    if args.policy.is_none() && args.implementation.is_none() && args.note.is_none() {
        return Err(CliError::InvalidInput(
            "Nothing to record. Pass --policy, --implementation or --note".to_string(),
        ));
    }

    let policy_status = args
        .policy
        .map(|id| check_status(id, "policy", |s| PolicyStatus::from_id(s).is_some(), policy_ids))
        .transpose()?;
    let implementation_status = args
        .implementation
        .map(|id| {
            check_status(
                id,
                "implementation",
                |s| ImplementationStatus::from_id(s).is_some(),
                implementation_ids,
            )
        })
        .transpose()?;

    Ok(SafeguardUpdate {
        safeguard_id,
        policy_status,
        implementation_status,
        note: args.note,
    })
}

/// Accept a known status id, or an empty string meaning "clear".
fn check_status(
    id: String,
    axis: &str,
    known: impl Fn(&str) -> bool,
    valid_ids: fn() -> Vec<&'static str>,
) -> Result<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() || known(trimmed) {
        return Ok(trimmed.to_string());
    }
    Err(CliError::InvalidInput(format!(
        "Unknown {} status '{}'. Expected one of: {}",
        axis,
        trimmed,
        valid_ids().join(", ")
    )))
}

fn policy_ids() -> Vec<&'static str> {
    PolicyStatus::ALL.iter().map(|s| s.id()).collect()
}

fn implementation_ids() -> Vec<&'static str> {
    ImplementationStatus::ALL.iter().map(|s| s.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(policy: Option<&str>, implementation: Option<&str>) -> AssessArgs {
        AssessArgs {
            safeguard_id: "4.1".to_string(),
            policy: policy.map(str::to_string),
            implementation: implementation.map(str::to_string),
            note: None,
        }
    }

    #[test]
    fn test_known_ids_accepted() {
        let update = build_update(args(Some("written"), Some("all_systems"))).unwrap();
        assert_eq!(update.safeguard_id, "4.1");
        assert_eq!(update.policy_status.as_deref(), Some("written"));
        assert_eq!(update.implementation_status.as_deref(), Some("all_systems"));
    }

    #[test]
    fn test_unknown_id_rejected() {
        let err = build_update(args(Some("sort_of"), None)).unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidInput(ref msg) if msg.contains("approved_documented")
        ));

        // Policy ids are not valid implementation ids
        assert!(build_update(args(None, Some("written"))).is_err());
    }

    #[test]
    fn test_empty_id_clears_axis() {
        let update = build_update(args(Some(""), None)).unwrap();
        assert_eq!(update.policy_status.as_deref(), Some(""));
        assert_eq!(update.implementation_status, None);
    }

    #[test]
    fn test_nothing_to_record() {
        assert!(build_update(args(None, None)).is_err());
    }
}

//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use posture_domain::traits::AssessmentStore;
use posture_domain::InventoryObject;
use posture_engine::{evaluate_all, EngineConfig, FrameworkDefinition, PostureEngine};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Execute the score command.
///
/// `default_tier` comes from settings and applies when `--tier` is absent.
pub fn execute_score<S>(
    args: ScoreArgs,
    store: &S,
    default_tier: Option<u8>,
    formatter: &Formatter,
) -> Result<()>
where
    S: AssessmentStore,
    CliError: From<S::Error>,
{
    let config = EngineConfig {
        tier_filter: args.tier.or(default_tier),
        auto_estimate: !args.no_estimate,
    };
    config.validate()?;

    let engines = args
        .frameworks
        .iter()
        .map(|path| -> Result<PostureEngine> {
            Ok(PostureEngine::new(FrameworkDefinition::load(path)?, config.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    let inventory = match &args.inventory {
        Some(path) => load_inventory(path)?,
        None => Vec::new(),
    };

    let snapshot = store.snapshot()?;
    debug!(
        assessments = snapshot.assessments.len(),
        overrides = snapshot.overrides.len(),
        objects = inventory.len(),
        "scoring snapshot"
    );

    let reports = evaluate_all(&engines, &snapshot, &inventory);
    println!("{}", formatter.format_reports(&reports)?);
    Ok(())
}

/// Read inventory objects from a JSON array file.
pub fn load_inventory(path: &Path) -> Result<Vec<InventoryObject>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(
            &path,
            r#"[
                {
                    "id": "db-01",
                    "categories": ["database"],
                    "is_formally_classified": true,
                    "compliance_percent": 40
                },
                {"id": "laptop-7", "secondary_classifications": ["SOX"]}
            ]"#,
        )
        .unwrap();

        let inventory = load_inventory(&path).unwrap();
        assert_eq!(inventory.len(), 2);
        assert!(inventory[0].has_measured_compliance());
        assert_eq!(inventory[1].name, "");
        assert!(!inventory[1].is_formally_classified);
    }

    #[test]
    fn test_inventory_must_be_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"id": "db-01"}"#).unwrap();

        assert!(matches!(load_inventory(&path), Err(CliError::Serialization(_))));
    }
}

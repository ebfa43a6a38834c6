//! Command-level tests against an in-memory store

use posture_cli::cli::{
    ApplyArgs, AssessArgs, OverrideAction, OverrideArgs, ScoreArgs, ValidateArgs,
};
use posture_cli::commands;
use posture_cli::config::OutputFormat;
use posture_cli::{CliError, Formatter};
use posture_domain::traits::AssessmentStore;
use posture_store::MemoryStore;
use std::fs;
use std::path::PathBuf;

const FRAMEWORK: &str = r#"
id = "demo"
name = "Demo"

[[groups]]
id = "1"
name = "Inventory"

[[safeguards]]
id = "1.1"
name = "Asset inventory"
group_id = "1"
applicability_tiers = [1, 2, 3]

[[safeguards]]
id = "1.2"
name = "Unauthorized assets"
group_id = "1"
applicability_tiers = [2, 3]

[crosswalk.primary]
Endpoint = ["1"]
"#;

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Quiet, false)
}

fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_assess_then_score() {
    let dir = tempfile::tempdir().unwrap();
    let framework = write(&dir, "demo.toml", FRAMEWORK);
    let mut store = MemoryStore::new();

    commands::execute_assess(
        AssessArgs {
            safeguard_id: "1.1".to_string(),
            policy: Some("approved_documented".to_string()),
            implementation: Some("all_systems".to_string()),
            note: Some("CMDB in place".to_string()),
        },
        &mut store,
        &formatter(),
    )
    .unwrap();

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.assessment("1.1").unwrap().note.as_deref(), Some("CMDB in place"));

    let args = ScoreArgs {
        frameworks: vec![framework],
        inventory: None,
        tier: Some(1),
        no_estimate: false,
    };
    commands::execute_score(args, &store, None, &formatter()).unwrap();
}

#[test]
fn test_assess_rejects_unknown_status() {
    let mut store = MemoryStore::new();
    let result = commands::execute_assess(
        AssessArgs {
            safeguard_id: "1.1".to_string(),
            policy: Some("approved".to_string()),
            implementation: None,
            note: None,
        },
        &mut store,
        &formatter(),
    );

    assert!(matches!(result, Err(CliError::InvalidInput(_))));
    assert!(store.snapshot().unwrap().assessments.is_empty());
}

#[test]
fn test_apply_suggestions() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(
        &dir,
        "suggestions.json",
        r#"[
            {
                "safeguard_id": "1.1",
                "policy_status": "written",
                "implementation_status": "some_systems"
            },
            {"safeguard_id": "1.2", "policy_status": "???"}
        ]"#,
    );
    let mut store = MemoryStore::new();

    let preview = ApplyArgs { file: file.clone(), dry_run: true };
    commands::execute_apply(preview, &mut store, &formatter()).unwrap();
    assert!(store.snapshot().unwrap().assessments.is_empty());

    commands::execute_apply(ApplyArgs { file, dry_run: false }, &mut store, &formatter()).unwrap();
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.assessments.len(), 1);
    assert!(snapshot.assessment("1.2").is_none());
}

#[test]
fn test_apply_rejects_non_array_payload() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(&dir, "suggestions.json", r#"{"safeguard_id": "1.1"}"#);
    let mut store = MemoryStore::new();

    let result =
        commands::execute_apply(ApplyArgs { file, dry_run: false }, &mut store, &formatter());
    assert!(matches!(result, Err(CliError::Store(_))));
}

#[test]
fn test_override_set_and_clear() {
    let mut store = MemoryStore::new();

    commands::execute_override(
        OverrideArgs {
            action: OverrideAction::Set {
                group_id: "1".to_string(),
                level: 4,
                note: None,
            },
        },
        &mut store,
        &formatter(),
    )
    .unwrap();
    assert_eq!(store.snapshot().unwrap().override_for("1").unwrap().level, 4);

    let out_of_range = commands::execute_override(
        OverrideArgs {
            action: OverrideAction::Set {
                group_id: "1".to_string(),
                level: 9,
                note: None,
            },
        },
        &mut store,
        &formatter(),
    );
    assert!(matches!(out_of_range, Err(CliError::InvalidInput(_))));
    assert_eq!(store.snapshot().unwrap().override_for("1").unwrap().level, 4);

    commands::execute_override(
        OverrideArgs {
            action: OverrideAction::Clear { group_id: "1".to_string() },
        },
        &mut store,
        &formatter(),
    )
    .unwrap();
    assert!(store.snapshot().unwrap().overrides.is_empty());
}

#[test]
fn test_validate_reports_broken_definition() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(&dir, "good.toml", FRAMEWORK);
    let broken = FRAMEWORK.replace("Endpoint = [\"1\"]", "Endpoint = [\"2\"]");
    let bad = write(&dir, "bad.toml", &broken);

    commands::execute_validate(ValidateArgs { framework: good }, &formatter()).unwrap();

    let result = commands::execute_validate(ValidateArgs { framework: bad }, &formatter());
    assert!(matches!(result, Err(CliError::Engine(_))));
}

#[test]
fn test_score_rejects_zero_tier() {
    let dir = tempfile::tempdir().unwrap();
    let framework = write(&dir, "demo.toml", FRAMEWORK);

    let args = ScoreArgs {
        frameworks: vec![framework],
        inventory: None,
        tier: Some(0),
        no_estimate: false,
    };
    let result = commands::execute_score(args, &MemoryStore::new(), None, &formatter());
    assert!(matches!(result, Err(CliError::Engine(_))));
}

#[test]
fn test_score_with_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let framework = write(&dir, "demo.toml", FRAMEWORK);
    let inventory = write(
        &dir,
        "inventory.json",
        r#"[{
            "id": "laptop-1",
            "categories": ["Endpoint"],
            "is_formally_classified": true,
            "compliance_percent": 70.0
        }]"#,
    );

    let args = ScoreArgs {
        frameworks: vec![framework],
        inventory: Some(inventory),
        tier: None,
        no_estimate: false,
    };
    commands::execute_score(args, &MemoryStore::new(), Some(2), &formatter()).unwrap();
}

//! Parse externally generated assessment suggestions
//!
//! Suggestions usually come from a language model asked to propose policy
//! and implementation statuses. The payload is untrusted: malformed entries
//! are skipped, and only ids from the status vocabularies are accepted.

use crate::StoreError;
use posture_domain::{ImplementationStatus, PolicyStatus, SafeguardUpdate};
use serde_json::Value;
use tracing::warn;

/// Parse a suggestion payload into write intents
///
/// Accepts a JSON array, optionally wrapped in a markdown code fence.
///
/// # Errors
/// Fails only when the payload as a whole is not a JSON array; individual
/// bad entries are logged and skipped.
pub fn parse_suggestions(response: &str) -> Result<Vec<SafeguardUpdate>, StoreError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| StoreError::Suggestion(format!("JSON parse error: {}", e)))?;

    let entries = json
        .as_array()
        .ok_or_else(|| StoreError::Suggestion("Expected JSON array".to_string()))?;

    let mut updates = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        match parse_entry(entry) {
            Ok(update) => updates.push(update),
            Err(e) => warn!("Skipping suggestion {}: {}", idx, e),
        }
    }

    Ok(updates)
}

/// Pull the body out of the first markdown code fence, if any
///
/// Text after the closing fence is ignored. An unterminated fence runs to the
/// end of the response.
fn extract_json(response: &str) -> Result<String, StoreError> {
    let trimmed = response.trim();

    if !trimmed.starts_with("```") {
        return Ok(trimmed.to_string());
    }

    let body: Vec<&str> = trimmed
        .lines()
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with("```"))
        .collect();
    if body.iter().all(|line| line.trim().is_empty()) {
        return Err(StoreError::Suggestion("Empty code block".to_string()));
    }

    Ok(body.join("\n"))
}

/// First string value among several accepted keys
fn string_field<'a>(
    obj: &'a serde_json::Map<String, Value>,
    keys: &[&str],
) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_entry(json: &Value) -> Result<SafeguardUpdate, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Suggestion is not a JSON object".to_string())?;

    let safeguard_id = string_field(obj, &["safeguard_id", "safeguardId", "id"])
        .ok_or_else(|| "Missing or invalid 'safeguard_id'".to_string())?
        .to_string();

    let policy_status = string_field(obj, &["policy_status", "policy"])
        .map(|id| {
            PolicyStatus::from_id(id)
                .map(|s| s.id().to_string())
                .ok_or_else(|| format!("Unknown policy status '{}' for {}", id, safeguard_id))
        })
        .transpose()?;

    let implementation_status = string_field(obj, &["implementation_status", "implementation"])
        .map(|id| {
            ImplementationStatus::from_id(id)
                .map(|s| s.id().to_string())
                .ok_or_else(|| {
                    format!("Unknown implementation status '{}' for {}", id, safeguard_id)
                })
        })
        .transpose()?;

    if policy_status.is_none() && implementation_status.is_none() {
        return Err(format!("No status suggested for {}", safeguard_id));
    }

    let note = string_field(obj, &["note", "rationale"]).map(str::to_string);

    Ok(SafeguardUpdate {
        safeguard_id,
        policy_status,
        implementation_status,
        note,
    })
}

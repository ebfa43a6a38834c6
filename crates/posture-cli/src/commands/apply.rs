//! Apply command implementation.

use crate::cli::ApplyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use posture_domain::traits::AssessmentStore;
use posture_store::parse_suggestions;
use std::fs;
use tracing::info;

/// Execute the apply command.
pub fn execute_apply<S>(args: ApplyArgs, store: &mut S, formatter: &Formatter) -> Result<()>
where
    S: AssessmentStore,
    CliError: From<S::Error>,
{
    let contents = fs::read_to_string(&args.file)?;
    let updates = parse_suggestions(&contents)?;

    if updates.is_empty() {
        println!("{}", formatter.warning("No usable suggestions found"));
        return Ok(());
    }

    if args.dry_run {
        println!("{}", formatter.info(&format!("Would apply {} assessment(s)", updates.len())));
        return Ok(());
    }

    let count = store.set_safeguards_bulk(updates)?;
    info!(file = %args.file.display(), count, "applied suggestions");

    println!("{}", formatter.bulk_result("Applied", count));
    Ok(())
}

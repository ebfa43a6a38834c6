//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::output::Formatter;
use posture_engine::FrameworkDefinition;

/// Execute the validate command.
pub fn execute_validate(args: ValidateArgs, formatter: &Formatter) -> Result<()> {
    let definition = FrameworkDefinition::load(&args.framework)?;
    println!("{}", formatter.format_framework(&definition)?);
    Ok(())
}

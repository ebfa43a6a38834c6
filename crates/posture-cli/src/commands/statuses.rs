//! Statuses command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the statuses command.
pub fn execute_statuses(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_statuses()?);
    Ok(())
}

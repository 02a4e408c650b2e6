//! Audit log command

use crate::error::LedgerResult;
use crate::models::MonthKey;
use crate::storage::Storage;

/// Print the most recent audit entries, optionally for one month
pub fn handle_audit_command(
    storage: &Storage,
    month: Option<&str>,
    limit: usize,
) -> LedgerResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let month = month.map(MonthKey::parse).transpose()?;
    let entries = logger.recent(month.as_ref(), limit)?;
    if entries.is_empty() {
        match &month {
            Some(key) => println!("No audit entries for {}.", key.format_friendly()),
            None => println!("No audit entries."),
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

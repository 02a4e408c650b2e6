//! Month summary and month listing commands

use crate::config::Settings;
use crate::display::{format_month_summary, DisplayOptions};
use crate::error::LedgerResult;
use crate::models::MonthKey;
use crate::reports::MonthSummary;
use crate::storage::Storage;

/// Print totals and balance for a month
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
) -> LedgerResult<()> {
    let key = MonthKey::parse_or_current(month)?;
    let summary = storage.month_service().summary(&key)?;
    print!(
        "{}",
        format_month_summary(&key, &summary, &DisplayOptions::from_settings(settings))
    );
    Ok(())
}

/// List every month that has stored data, oldest first
pub fn handle_months_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let all = storage.months.load_all()?;
    if all.is_empty() {
        println!("No months recorded yet.");
        return Ok(());
    }

    println!("{:8} {:>8} {:>14}", "Month", "Entries", "Balance");
    println!("{}", "-".repeat(32));
    for (key, data) in &all {
        let summary = MonthSummary::from_month(data)?;
        println!(
            "{:8} {:>8} {:>14}",
            key.as_str(),
            data.entry_count(),
            summary.balance.format_with_symbol(&settings.currency_symbol)
        );
    }
    Ok(())
}

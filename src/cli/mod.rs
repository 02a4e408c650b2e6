//! CLI command handlers
//!
//! Bridges clap argument parsing with the month service. User input is
//! validated here before anything reaches the store.

pub mod audit;
pub mod export;
pub mod investment;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use export::{handle_export_command, ExportFormat};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{handle_months_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthKey};

/// Parse an amount argument
pub(crate) fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))
}

/// The date stored on a new or edited entry
///
/// Defaults to the first day of the selected month.
pub(crate) fn entry_date(key: &MonthKey, date: Option<&str>) -> LedgerResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
        }),
        None => key
            .first_day()
            .ok_or_else(|| LedgerError::Validation(format!("Invalid month '{}'", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("49.99").unwrap(), Money::from_cents(4999));
        assert!(parse_amount("abc").unwrap_err().is_validation());
        assert!(parse_amount("").unwrap_err().is_validation());
    }

    #[test]
    fn test_entry_date_defaults_to_first_of_month() {
        let key = MonthKey::new(2024, 2);
        assert_eq!(
            entry_date(&key, None).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        assert_eq!(
            entry_date(&key, Some("2024-02-29")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(entry_date(&key, Some("29/02/2024")).unwrap_err().is_validation());
    }
}

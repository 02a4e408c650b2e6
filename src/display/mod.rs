//! Display formatting for terminal output
//!
//! Plain-text tables and summaries, using the currency symbol and date
//! format from the user's settings.

pub mod entries;
pub mod summary;

pub use entries::{
    format_investment_details, format_investment_list, format_investment_row,
    format_transaction_details, format_transaction_list, format_transaction_row,
};
pub use summary::format_month_summary;

use crate::config::Settings;

/// Formatting preferences taken from settings
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

//! Month keys
//!
//! Every month's data lives under a `YYYY-MM` key. Keys are derived from full
//! date strings by taking their first seven characters, which is why the
//! derivation itself performs no calendar validation: `"2024-13-01"` maps to
//! `"2024-13"` just as well. Strict parsing is available separately for user
//! input.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Length of a `YYYY-MM` key
const KEY_LEN: usize = 7;

/// Identifies one calendar month's data partition
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    /// Build a key from a year and a 1-based month, zero-padding the month
    pub fn new(year: i32, month: u32) -> Self {
        Self(format!("{:04}-{:02}", year, month))
    }

    /// The key for the month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The key for the current local month
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Strictly parse a `YYYY-MM` key supplied by a user
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let s = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map_err(|_| LedgerError::Validation(format!("Invalid month '{}', expected YYYY-MM", s)))?;

        if s.len() != KEY_LEN {
            return Err(LedgerError::Validation(format!(
                "Invalid month '{}', expected YYYY-MM",
                s
            )));
        }

        Ok(Self::from_date(date))
    }

    /// Parse an optional key, falling back to the current month
    pub fn parse_or_current(s: Option<&str>) -> LedgerResult<Self> {
        match s {
            Some(s) => Self::parse(s),
            None => Ok(Self::current()),
        }
    }

    /// The key as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First day of the month, if the key names a real calendar month
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&format!("{}-01", self.0), "%Y-%m-%d").ok()
    }

    /// Human-readable form, e.g. "March 2024"
    pub fn format_friendly(&self) -> String {
        match self.first_day() {
            Some(date) => date.format("%B %Y").to_string(),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MonthKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the month key from a full date string by taking its first seven
/// characters
///
/// Strings shorter than seven characters cannot name a month and are
/// rejected as a validation error.
///
/// # Examples
/// ```
/// use monthbook::models::derive_month_key;
/// assert_eq!(derive_month_key("2024-03-01").unwrap().as_str(), "2024-03");
/// ```
pub fn derive_month_key(date: &str) -> LedgerResult<MonthKey> {
    date.get(..KEY_LEN)
        .map(|prefix| MonthKey(prefix.to_string()))
        .ok_or_else(|| {
            LedgerError::Validation(format!(
                "Date '{}' is too short to derive a month key",
                date
            ))
        })
}

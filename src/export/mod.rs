//! Export module for monthbook
//!
//! Exports a single month in several formats:
//! - CSV: one row per entry (spreadsheet-compatible)
//! - JSON: entries plus totals, machine-readable
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_month_csv;
pub use json::{export_month_json, MonthExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_month_yaml;

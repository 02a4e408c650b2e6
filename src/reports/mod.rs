//! Reports module for monthbook
//!
//! Aggregations computed on demand from a month's entries.

pub mod month_summary;

pub use month_summary::MonthSummary;

//! monthbook - month-partitioned personal finance records
//!
//! Income, expenses and investments are grouped by calendar month. All
//! months live in one JSON document under a single storage key, and every
//! change is a read-modify-write of one month within it.
//!
//! # Architecture
//!
//! - `models`: entries, month keys, and the per-month container
//! - `storage`: key/value media and the month-partitioned store
//! - `reports`: month totals and balance
//! - `services`: add/edit/delete flows over one month
//! - `audit`: append-only change log
//! - `export`: CSV, JSON and YAML export of a month
//! - `cli`, `display`: command handlers and terminal formatting
//! - `config`, `logging`, `error`: paths, settings, diagnostics, errors
//!
//! # Example
//!
//! ```rust
//! use monthbook::models::MonthlyData;
//! use monthbook::storage::{MemoryStore, MonthlyStore};
//!
//! let store = MonthlyStore::new(MemoryStore::new());
//! store.update_month_data("2024-03-15", MonthlyData::empty())?;
//! assert!(store.get_month_data("2024-03-01")?.is_empty());
//! # Ok::<(), monthbook::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;

//! Core data models for monthbook
//!
//! Transactions, investments, the per-month container and the month keys
//! that partition them.

pub mod entries;
pub mod ids;
pub mod investment;
pub mod money;
pub mod month;
pub mod monthly;
pub mod transaction;

pub use entries::{Entry, EntryList};
pub use ids::{EntryId, InvestmentId, TransactionId};
pub use investment::{Investment, InvestmentDraft, InvestmentValidationError};
pub use money::{Money, MoneyParseError, MAX_SIGNIFICANT_DIGITS};
pub use month::{derive_month_key, MonthKey};
pub use monthly::{MonthlyData, MonthlyDataMap};
pub use transaction::{
    Transaction, TransactionDraft, TransactionKind, TransactionValidationError,
};

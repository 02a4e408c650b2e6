//! Service layer for monthbook
//!
//! Business logic on top of the storage layer: the add, edit and delete
//! flows for a month's entries.

pub mod month;

pub use month::MonthService;

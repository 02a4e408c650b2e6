//! Configuration module for monthbook
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{MonthbookPaths, DATA_DIR_ENV};
pub use settings::Settings;

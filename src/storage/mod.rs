//! Storage layer for monthbook
//!
//! Provides the month-partitioned store, the key/value media it runs on,
//! and JSON file helpers with atomic writes.

pub mod file_io;
pub mod medium;
pub mod monthly;

pub use file_io::write_json_atomic;
pub use medium::{FileStore, KeyValueStore, MemoryStore};
pub use monthly::{MonthlyStore, DEFAULT_STORAGE_KEY};

use crate::audit::AuditLogger;
use crate::config::paths::MonthbookPaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;
use crate::services::MonthService;

/// Main storage coordinator for the on-disk layout
pub struct Storage {
    paths: MonthbookPaths,
    pub months: MonthlyStore<FileStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MonthbookPaths, settings: &Settings) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            months: MonthlyStore::with_key(
                FileStore::new(paths.data_dir()),
                settings.storage_key.clone(),
            ),
            paths,
            audit,
        })
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Month service over the stored months, auditing when enabled
    pub fn month_service(&self) -> MonthService<'_, FileStore> {
        let service = MonthService::new(&self.months);
        match &self.audit {
            Some(logger) => service.with_audit(logger),
            None => service,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MonthbookPaths {
        &self.paths
    }

    /// Check if any month data has been written yet
    pub fn has_data(&self) -> Result<bool, LedgerError> {
        Ok(self.months.medium().get(self.months.key())?.is_some())
    }
}

//! Append-only JSONL audit log

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use serde_json::Deserializer;

use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthKey;
use crate::storage::file_io::read_text_opt;

use super::entry::AuditEntry;

/// Writes audit entries to a JSONL file and reads them back by month
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry as a single line
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|e| LedgerError::Io(format!("Failed to append to audit log: {}", e)))
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let Some(text) = read_text_opt(&self.log_path)? else {
            return Ok(Vec::new());
        };

        Deserializer::from_str(&text)
            .into_iter::<AuditEntry>()
            .collect::<Result<_, _>>()
            .map_err(|e| LedgerError::Json(format!("Corrupt audit log: {}", e)))
    }

    /// The last `count` entries, optionally only those for one month
    pub fn recent(&self, month: Option<&MonthKey>, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        if let Some(month) = month {
            entries.retain(|e| &e.month == month);
        }
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }
}

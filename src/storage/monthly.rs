//! Month-partitioned store
//!
//! The entire history is one JSON object, keyed by `YYYY-MM`, stored under a
//! single key of the persistence medium. Every operation starts from a fresh
//! `load_all`: nothing is cached between calls, so what a caller sees is
//! always what the medium holds.
//!
//! # Concurrent writers
//!
//! `update_month_data` is a read-modify-write of the *whole* map. Two
//! sessions sharing one medium can lose each other's writes, even to
//! different months: each re-serializes the map from its own snapshot, and
//! the last `set` wins. This store does not lock against that. It assumes one
//! active writer.

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    derive_month_key, MonthKey, MonthlyData, MonthlyDataMap, MAX_SIGNIFICANT_DIGITS,
};

use super::medium::KeyValueStore;

/// Key the month map is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "financial_data";

/// Month-keyed persistence of [`MonthlyData`] over a key/value medium
#[derive(Debug)]
pub struct MonthlyStore<S> {
    medium: S,
    key: String,
}

impl<S: KeyValueStore> MonthlyStore<S> {
    /// Create a store using the default storage key
    pub fn new(medium: S) -> Self {
        Self::with_key(medium, DEFAULT_STORAGE_KEY)
    }

    /// Create a store that keeps its map under `key`
    pub fn with_key(medium: S, key: impl Into<String>) -> Self {
        Self {
            medium,
            key: key.into(),
        }
    }

    /// The storage key holding the map
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying medium
    pub fn medium(&self) -> &S {
        &self.medium
    }

    /// Read the whole map
    ///
    /// Nothing stored yet yields an empty map. Stored text that does not
    /// parse as a month map is a [`LedgerError::Parse`]; no partial data is
    /// returned in that case.
    pub fn load_all(&self) -> LedgerResult<MonthlyDataMap> {
        let stored = match self.medium.get(&self.key)? {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!(key = %self.key, "no stored data, starting empty");
                return Ok(MonthlyDataMap::new());
            }
        };

        let map: MonthlyDataMap = serde_json::from_str(&stored).map_err(|e| {
            warn!(key = %self.key, error = %e, "stored data failed to parse");
            LedgerError::Parse {
                key: self.key.clone(),
                message: e.to_string(),
            }
        })?;

        debug!(key = %self.key, months = map.len(), "loaded month map");
        Ok(map)
    }

    /// Month data for the month of `date`, or an empty month if none exists
    ///
    /// Reading never writes: an absent month stays absent.
    pub fn get_month_data(&self, date: &str) -> LedgerResult<MonthlyData> {
        let key = derive_month_key(date)?;
        self.get_month(&key)
    }

    /// Replace the month of `date` with `data` and persist the whole map
    pub fn update_month_data(&self, date: &str, data: MonthlyData) -> LedgerResult<()> {
        let key = derive_month_key(date)?;
        self.update_month(&key, data)
    }

    /// Month data for an already derived key
    pub fn get_month(&self, key: &MonthKey) -> LedgerResult<MonthlyData> {
        let mut map = self.load_all()?;
        Ok(map.remove(key).unwrap_or_default())
    }

    /// Replace the data under an already derived key
    ///
    /// Data holding a number with more than [`MAX_SIGNIFICANT_DIGITS`]
    /// significant digits is refused before anything is read or written,
    /// since it would not read back unchanged.
    pub fn update_month(&self, key: &MonthKey, data: MonthlyData) -> LedgerResult<()> {
        if let Some(value) = data.first_unstorable() {
            return Err(LedgerError::Validation(format!(
                "{} has more than {} significant digits and cannot be stored exactly",
                value, MAX_SIGNIFICANT_DIGITS
            )));
        }
        let mut map = self.load_all()?;
        map.insert(key.clone(), data);
        self.save_all(&map)?;
        debug!(key = %self.key, month = %key, "updated month");
        Ok(())
    }

    /// Months present in the map, oldest first
    pub fn months(&self) -> LedgerResult<Vec<MonthKey>> {
        Ok(self.load_all()?.into_keys().collect())
    }

    fn save_all(&self, map: &MonthlyDataMap) -> LedgerResult<()> {
        let text = serde_json::to_string(map)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize month map: {}", e)))?;
        self.medium.set(&self.key, &text)
    }
}

//! Ordered, id-keyed entry sequences
//!
//! Each month holds its entries in insertion order, and that order is the
//! display order. `EntryList` keeps it that way: appends go to the end, edits
//! replace in place, and removals leave the relative order of everything
//! else untouched. Nothing here ever sorts.

use serde::{Deserialize, Serialize};

use super::ids::EntryId;
use crate::error::{LedgerError, LedgerResult};

/// A record addressable by a stable id
pub trait Entry: Clone {
    type Id: EntryId;

    fn id(&self) -> Self::Id;
}

/// An insertion-ordered sequence of entries with id-based operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList<T> {
    entries: Vec<T>,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Entry> EntryList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in display order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Entries as a slice, in display order
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Whether an entry with this id exists
    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    /// Index of the entry with this id
    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Find an entry by id
    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Find an entry by a user-supplied id string (full or short form)
    ///
    /// A prefix that fits more than one entry is a `Validation` error.
    pub fn resolve(&self, s: &str) -> LedgerResult<Option<&T>> {
        let mut hits = self.entries.iter().filter(|e| e.id().matches(s));
        let first = hits.next();
        let others = hits.count();
        if others > 0 {
            return Err(LedgerError::Validation(format!(
                "Id '{}' matches {} entries; give more of it",
                s.trim(),
                others + 1
            )));
        }
        Ok(first)
    }

    /// Draw an id that no entry in this list already uses
    pub fn fresh_id(&self) -> T::Id {
        loop {
            let id = T::Id::generate();
            if !self.contains(id) {
                return id;
            }
        }
    }

    /// Build an entry around a fresh id and append it
    pub fn push_new<F>(&mut self, build: F) -> &T
    where
        F: FnOnce(T::Id) -> T,
    {
        let entry = build(self.fresh_id());
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    /// Replace the entry whose id matches `entry`, keeping its position
    ///
    /// Returns the previous value, or `None` (leaving the list unchanged)
    /// when no entry has that id.
    pub fn replace(&mut self, entry: T) -> Option<T> {
        let index = self.position(entry.id())?;
        Some(std::mem::replace(&mut self.entries[index], entry))
    }

    /// Remove the entry with this id
    ///
    /// Returns the removed entry, or `None` when no entry has that id.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }
}

impl<T> From<Vec<T>> for EntryList<T> {
    fn from(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

impl<'a, T> IntoIterator for &'a EntryList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

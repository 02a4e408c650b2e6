//! One month's entries and the map of all months

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entries::EntryList;
use super::investment::Investment;
use super::money::is_storable;
use super::month::MonthKey;
use super::transaction::{Transaction, TransactionKind};

/// Everything recorded for a single month
///
/// All three sequences are required on the wire; a document missing one is
/// treated as malformed rather than patched up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyData {
    pub income: EntryList<Transaction>,
    pub expenses: EntryList<Transaction>,
    pub investments: EntryList<Investment>,
}

impl MonthlyData {
    /// A month with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the month has no entries at all
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty() && self.investments.is_empty()
    }

    /// The income or expense sequence
    pub fn transactions(&self, kind: TransactionKind) -> &EntryList<Transaction> {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expenses,
        }
    }

    /// Mutable access to the income or expense sequence
    pub fn transactions_mut(&mut self, kind: TransactionKind) -> &mut EntryList<Transaction> {
        match kind {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expenses,
        }
    }

    /// The first amount or return that would not read back unchanged
    pub fn first_unstorable(&self) -> Option<Decimal> {
        let transactions = self.income.iter().chain(self.expenses.iter());
        transactions
            .map(|t| t.amount.amount())
            .chain(
                self.investments
                    .iter()
                    .flat_map(|i| [i.amount.amount(), i.returns]),
            )
            .find(|v| !is_storable(*v))
    }

    /// Total number of entries across all sequences
    pub fn entry_count(&self) -> usize {
        self.income.len() + self.expenses.len() + self.investments.len()
    }
}

/// The whole persisted state: month key to that month's data
pub type MonthlyDataMap = BTreeMap<MonthKey, MonthlyData>;

//! Month service
//!
//! Adds, edits and deletes entries of one month. Each change reads the
//! month, mutates one of its sequences, and writes the month back through
//! the store. Edits and deletes of an id the month doesn't contain change
//! nothing and write nothing.

use tracing::debug;

use crate::audit::{describe_edit, AuditEntry, AuditLogger, EntityType};
use crate::error::LedgerResult;
use crate::models::{
    Investment, InvestmentDraft, InvestmentId, MonthKey, MonthlyData, Transaction,
    TransactionDraft, TransactionId, TransactionKind,
};
use crate::reports::MonthSummary;
use crate::storage::{KeyValueStore, MonthlyStore};

/// Service for editing a month's entries
pub struct MonthService<'a, S> {
    store: &'a MonthlyStore<S>,
    audit: Option<&'a AuditLogger>,
}

impl<'a, S: KeyValueStore> MonthService<'a, S> {
    /// Create a month service without audit logging
    pub fn new(store: &'a MonthlyStore<S>) -> Self {
        Self { store, audit: None }
    }

    /// Record every change in `logger`
    pub fn with_audit(mut self, logger: &'a AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The month's current entries
    pub fn month(&self, key: &MonthKey) -> LedgerResult<MonthlyData> {
        self.store.get_month(key)
    }

    /// Totals for the month, computed from its current entries
    pub fn summary(&self, key: &MonthKey) -> LedgerResult<MonthSummary> {
        MonthSummary::from_month(&self.month(key)?)
    }

    /// Append a new income or expense transaction with a fresh id
    pub fn add_transaction(
        &self,
        kind: TransactionKind,
        key: &MonthKey,
        draft: TransactionDraft,
    ) -> LedgerResult<Transaction> {
        let mut data = self.store.get_month(key)?;
        let created = data
            .transactions_mut(kind)
            .push_new(|id| Transaction::from_draft(id, draft))
            .clone();
        self.store.update_month(key, data)?;

        debug!(month = %key, id = %created.id, kind = %kind, "added transaction");
        self.record(AuditEntry::create(
            kind.into(),
            created.id.to_string(),
            key,
            Some(created.description.clone()),
            &created,
        ))?;

        Ok(created)
    }

    /// Replace the transaction with the same id, keeping its position
    ///
    /// Returns `false` when the month has no transaction with that id.
    pub fn edit_transaction(
        &self,
        kind: TransactionKind,
        key: &MonthKey,
        transaction: Transaction,
    ) -> LedgerResult<bool> {
        let mut data = self.store.get_month(key)?;
        let Some(before) = data.transactions_mut(kind).replace(transaction.clone()) else {
            return Ok(false);
        };
        self.store.update_month(key, data)?;

        debug!(month = %key, id = %transaction.id, kind = %kind, "edited transaction");
        self.record_update(kind.into(), key, &before, &transaction, &transaction.description)?;

        Ok(true)
    }

    /// Remove the transaction with this id
    ///
    /// Returns `false` when the month has no transaction with that id.
    pub fn delete_transaction(
        &self,
        kind: TransactionKind,
        key: &MonthKey,
        id: TransactionId,
    ) -> LedgerResult<bool> {
        let mut data = self.store.get_month(key)?;
        let Some(removed) = data.transactions_mut(kind).remove(id) else {
            return Ok(false);
        };
        self.store.update_month(key, data)?;

        debug!(month = %key, id = %id, kind = %kind, "deleted transaction");
        self.record(AuditEntry::delete(
            kind.into(),
            id.to_string(),
            key,
            Some(removed.description.clone()),
            &removed,
        ))?;

        Ok(true)
    }

    /// Append a new investment with a fresh id
    pub fn add_investment(
        &self,
        key: &MonthKey,
        draft: InvestmentDraft,
    ) -> LedgerResult<Investment> {
        let mut data = self.store.get_month(key)?;
        let created = data
            .investments
            .push_new(|id| Investment::from_draft(id, draft))
            .clone();
        self.store.update_month(key, data)?;

        debug!(month = %key, id = %created.id, "added investment");
        self.record(AuditEntry::create(
            EntityType::Investment,
            created.id.to_string(),
            key,
            Some(created.description.clone()),
            &created,
        ))?;

        Ok(created)
    }

    /// Replace the investment with the same id, keeping its position
    pub fn edit_investment(&self, key: &MonthKey, investment: Investment) -> LedgerResult<bool> {
        let mut data = self.store.get_month(key)?;
        let Some(before) = data.investments.replace(investment.clone()) else {
            return Ok(false);
        };
        self.store.update_month(key, data)?;

        debug!(month = %key, id = %investment.id, "edited investment");
        self.record_update(
            EntityType::Investment,
            key,
            &before,
            &investment,
            &investment.description,
        )?;

        Ok(true)
    }

    /// Remove the investment with this id
    pub fn delete_investment(&self, key: &MonthKey, id: InvestmentId) -> LedgerResult<bool> {
        let mut data = self.store.get_month(key)?;
        let Some(removed) = data.investments.remove(id) else {
            return Ok(false);
        };
        self.store.update_month(key, data)?;

        debug!(month = %key, id = %id, "deleted investment");
        self.record(AuditEntry::delete(
            EntityType::Investment,
            id.to_string(),
            key,
            Some(removed.description.clone()),
            &removed,
        ))?;

        Ok(true)
    }

    fn record_update<T: serde::Serialize + crate::models::Entry>(
        &self,
        entity_type: EntityType,
        key: &MonthKey,
        before: &T,
        after: &T,
        name: &str,
    ) -> LedgerResult<()> {
        if self.audit.is_none() {
            return Ok(());
        }
        let diff = describe_edit(before, after);
        self.record(AuditEntry::update(
            entity_type,
            after.id().to_string(),
            key,
            Some(name.to_string()),
            before,
            after,
            diff,
        ))
    }

    fn record(&self, entry: AuditEntry) -> LedgerResult<()> {
        match self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::Money;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn march() -> MonthKey {
        MonthKey::new(2024, 3)
    }

    fn draft(description: &str, units: i64) -> TransactionDraft {
        TransactionDraft::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description,
            Money::from_units(units),
            "misc",
        )
    }

    fn descriptions(data: &MonthlyData, kind: TransactionKind) -> Vec<String> {
        data.transactions(kind)
            .iter()
            .map(|t| t.description.clone())
            .collect()
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);

        let first = service
            .add_transaction(TransactionKind::Income, &march(), draft("Salary", 1000))
            .unwrap();
        let second = service
            .add_transaction(TransactionKind::Income, &march(), draft("Bonus", 500))
            .unwrap();

        assert_ne!(first.id, second.id);
        let data = service.month(&march()).unwrap();
        assert_eq!(
            descriptions(&data, TransactionKind::Income),
            vec!["Salary", "Bonus"]
        );
        assert!(data.expenses.is_empty());
    }

    #[test]
    fn test_kind_selects_sequence() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);

        service
            .add_transaction(
                TransactionKind::Expense,
                &march(),
                draft("Rent", 1200).with_payment_method("Bank transfer"),
            )
            .unwrap();

        let data = service.month(&march()).unwrap();
        assert!(data.income.is_empty());
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(
            data.expenses.as_slice()[0].payment_method.as_deref(),
            Some("Bank transfer")
        );
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);
        let kind = TransactionKind::Expense;

        service.add_transaction(kind, &march(), draft("A", 1)).unwrap();
        let mut middle = service.add_transaction(kind, &march(), draft("B", 2)).unwrap();
        service.add_transaction(kind, &march(), draft("C", 3)).unwrap();

        middle.description = "B2".to_string();
        middle.amount = Money::from_units(20);
        assert!(service.edit_transaction(kind, &march(), middle.clone()).unwrap());

        let data = service.month(&march()).unwrap();
        assert_eq!(descriptions(&data, kind), vec!["A", "B2", "C"]);
        assert_eq!(data.expenses.find(middle.id).unwrap().amount, Money::from_units(20));
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);
        let kind = TransactionKind::Income;

        service.add_transaction(kind, &march(), draft("A", 1)).unwrap();
        let before = service.month(&march()).unwrap();

        let stranger = Transaction::from_draft(TransactionId::new(), draft("X", 9));
        assert!(!service.edit_transaction(kind, &march(), stranger).unwrap());
        assert_eq!(service.month(&march()).unwrap(), before);
    }

    #[test]
    fn test_edit_in_wrong_sequence_is_noop() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);

        let income = service
            .add_transaction(TransactionKind::Income, &march(), draft("Salary", 1))
            .unwrap();
        assert!(!service
            .edit_transaction(TransactionKind::Expense, &march(), income)
            .unwrap());
    }

    #[test]
    fn test_delete_removes_only_match() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);
        let kind = TransactionKind::Income;

        service.add_transaction(kind, &march(), draft("A", 1)).unwrap();
        let b = service.add_transaction(kind, &march(), draft("B", 2)).unwrap();
        service.add_transaction(kind, &march(), draft("C", 3)).unwrap();

        assert!(service.delete_transaction(kind, &march(), b.id).unwrap());
        let data = service.month(&march()).unwrap();
        assert_eq!(descriptions(&data, kind), vec!["A", "C"]);

        assert!(!service.delete_transaction(kind, &march(), b.id).unwrap());
        assert_eq!(service.month(&march()).unwrap(), data);
    }

    #[test]
    fn test_noop_does_not_create_month() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);

        assert!(!service
            .delete_transaction(TransactionKind::Income, &march(), TransactionId::new())
            .unwrap());
        assert!(store.months().unwrap().is_empty());
    }

    #[test]
    fn test_investment_lifecycle() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);
        let inv_draft = InvestmentDraft::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "ETF",
            Money::from_units(300),
            "stocks",
            dec!(5),
        );

        let mut inv = service.add_investment(&march(), inv_draft).unwrap();
        inv.returns = dec!(-3.5);
        assert!(service.edit_investment(&march(), inv.clone()).unwrap());
        assert_eq!(
            service.month(&march()).unwrap().investments.find(inv.id).unwrap().returns,
            dec!(-3.5)
        );

        assert!(service.delete_investment(&march(), inv.id).unwrap());
        assert!(service.month(&march()).unwrap().investments.is_empty());
        assert!(!service.delete_investment(&march(), inv.id).unwrap());
    }

    #[test]
    fn test_summary_reflects_changes() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);

        service
            .add_transaction(TransactionKind::Income, &march(), draft("Salary", 1000))
            .unwrap();
        service
            .add_transaction(TransactionKind::Expense, &march(), draft("Food", 200))
            .unwrap();

        let summary = service.summary(&march()).unwrap();
        assert_eq!(summary.balance, Money::from_units(800));
    }

    #[test]
    fn test_other_months_untouched() {
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store);
        let february = MonthKey::new(2024, 2);

        service
            .add_transaction(TransactionKind::Income, &february, draft("Salary", 1000))
            .unwrap();
        let before = service.month(&february).unwrap();

        service
            .add_transaction(TransactionKind::Income, &march(), draft("Salary", 1100))
            .unwrap();
        assert_eq!(service.month(&february).unwrap(), before);
    }

    #[test]
    fn test_changes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = MonthlyStore::new(MemoryStore::new());
        let service = MonthService::new(&store).with_audit(&logger);
        let kind = TransactionKind::Expense;

        let mut txn = service.add_transaction(kind, &march(), draft("Rent", 1200)).unwrap();
        txn.amount = Money::from_units(1250);
        service.edit_transaction(kind, &march(), txn.clone()).unwrap();
        service.delete_transaction(kind, &march(), txn.id).unwrap();
        // no-ops leave no trace
        service.delete_transaction(kind, &march(), txn.id).unwrap();

        let entries = logger.read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
        assert!(entries.iter().all(|e| e.entity_type == EntityType::Expense));
        let diff = entries[1].diff_summary.as_deref().unwrap();
        assert!(diff.starts_with("amount: 1200"));
    }
}

//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{MonthKey, TransactionKind};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entries that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Income,
    Expense,
    Investment,
}

impl From<TransactionKind> for EntityType {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => EntityType::Income,
            TransactionKind::Expense => EntityType::Expense,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Income => write!(f, "Income"),
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Investment => write!(f, "Investment"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Month the entry belongs to
    pub month: MonthKey,

    /// Human-readable description of the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// The entry before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The entry after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn base(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        month: &MonthKey,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            month: month.clone(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a newly added record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        month: &MonthKey,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::base(Operation::Create, entity_type, entity_id, month, entity_name)
        }
    }

    /// Entry for an edited record
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        month: &MonthKey,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::base(Operation::Update, entity_type, entity_id, month, entity_name)
        }
    }

    /// Entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        month: &MonthKey,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::base(Operation::Delete, entity_type, entity_id, month, entity_name)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id,
            self.month
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" \"{}\"", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_entity_type_from_kind() {
        assert_eq!(EntityType::from(TransactionKind::Income), EntityType::Income);
        assert_eq!(EntityType::from(TransactionKind::Expense), EntityType::Expense);
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Income,
            "txn-12345678",
            &MonthKey::new(2024, 3),
            Some("Salary".to_string()),
            &json!({"description": "Salary", "amount": 1000}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 1000);
    }

    #[test]
    fn test_human_readable_includes_month_and_diff() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "txn-12345678",
            &MonthKey::new(2024, 3),
            Some("Rent".to_string()),
            &json!({"amount": 1000}),
            &json!({"amount": 1100}),
            Some("amount: 1000 -> 1100".to_string()),
        );

        let text = entry.format_human_readable();
        assert!(text.contains("UPDATE Expense txn-12345678 (2024-03)"));
        assert!(text.contains("\"Rent\""));
        assert!(text.contains("Changes: amount: 1000 -> 1100"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::delete(
            EntityType::Investment,
            "inv-12345678",
            &MonthKey::new(2024, 3),
            None,
            &json!({"amount": 300}),
        );

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entity_type"], "investment");
        assert!(json.get("after").is_none());
        assert!(json.get("entity_name").is_none());
    }
}

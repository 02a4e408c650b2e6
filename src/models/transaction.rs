//! Income and expense transactions
//!
//! Both kinds share one shape; which sequence a transaction sits in decides
//! whether it is income or an expense. Only expenses carry a payment method.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entries::Entry;
use super::ids::TransactionId;
use super::money::{Money, MAX_SIGNIFICANT_DIGITS};

/// Which side of the month a transaction belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Whether transactions of this kind may record a payment method
    pub fn has_payment_method(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// Plural heading used in listings and exports
    pub fn section(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expenses",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Validation errors for transaction input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    EmptyCategory,
    NegativeAmount,
    AmountTooPrecise,
    PaymentMethodOnIncome,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::AmountTooPrecise => write!(
                f,
                "Amount cannot have more than {} significant digits",
                MAX_SIGNIFICANT_DIGITS
            ),
            Self::PaymentMethodOnIncome => {
                write!(f, "Income transactions do not take a payment method")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl Transaction {
    /// Attach an id to a draft
    pub fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            date: draft.date,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            payment_method: draft.payment_method,
        }
    }

    /// The transaction's fields without its id
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            date: self.date,
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
            payment_method: self.payment_method.clone(),
        }
    }
}

impl Entry for Transaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }
}

/// A transaction as submitted for creation, before it has an id
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub payment_method: Option<String>,
}

impl TransactionDraft {
    /// Create a draft without a payment method
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
            payment_method: None,
        }
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    /// Check the input rules for a transaction of the given kind
    pub fn validate(&self, kind: TransactionKind) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }
        if !self.amount.is_storable() {
            return Err(TransactionValidationError::AmountTooPrecise);
        }
        if self.payment_method.is_some() && !kind.has_payment_method() {
            return Err(TransactionValidationError::PaymentMethodOnIncome);
        }
        Ok(())
    }
}

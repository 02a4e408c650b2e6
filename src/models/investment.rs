//! Investment entries

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entries::Entry;
use super::ids::InvestmentId;
use super::money::{self, Money, MAX_SIGNIFICANT_DIGITS};

/// Validation errors for investment input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentValidationError {
    EmptyDescription,
    EmptyType,
    NegativeAmount,
    AmountTooPrecise,
    ReturnsTooPrecise,
}

impl fmt::Display for InvestmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::EmptyType => write!(f, "Investment type cannot be empty"),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::AmountTooPrecise => write!(
                f,
                "Amount cannot have more than {} significant digits",
                MAX_SIGNIFICANT_DIGITS
            ),
            Self::ReturnsTooPrecise => write!(
                f,
                "Returns cannot have more than {} significant digits",
                MAX_SIGNIFICANT_DIGITS
            ),
        }
    }
}

impl std::error::Error for InvestmentValidationError {}

/// Money put into an investment during a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    /// Free-text investment class, e.g. "stocks"
    #[serde(rename = "type")]
    pub kind: String,
    /// Percentage return; any sign
    #[serde(with = "money::float_repr")]
    pub returns: Decimal,
}

impl Investment {
    /// Attach an id to a draft
    pub fn from_draft(id: InvestmentId, draft: InvestmentDraft) -> Self {
        Self {
            id,
            date: draft.date,
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            returns: draft.returns,
        }
    }

    /// The investment's fields without its id
    pub fn to_draft(&self) -> InvestmentDraft {
        InvestmentDraft {
            date: self.date,
            description: self.description.clone(),
            amount: self.amount,
            kind: self.kind.clone(),
            returns: self.returns,
        }
    }
}

impl Entry for Investment {
    type Id = InvestmentId;

    fn id(&self) -> InvestmentId {
        self.id
    }
}

/// An investment as submitted for creation, before it has an id
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentDraft {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub kind: String,
    pub returns: Decimal,
}

impl InvestmentDraft {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        kind: impl Into<String>,
        returns: Decimal,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            kind: kind.into(),
            returns,
        }
    }

    /// Check the input rules for an investment
    pub fn validate(&self) -> Result<(), InvestmentValidationError> {
        if self.description.trim().is_empty() {
            return Err(InvestmentValidationError::EmptyDescription);
        }
        if self.kind.trim().is_empty() {
            return Err(InvestmentValidationError::EmptyType);
        }
        if self.amount.is_negative() {
            return Err(InvestmentValidationError::NegativeAmount);
        }
        if !self.amount.is_storable() {
            return Err(InvestmentValidationError::AmountTooPrecise);
        }
        if !money::is_storable(self.returns) {
            return Err(InvestmentValidationError::ReturnsTooPrecise);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> InvestmentDraft {
        InvestmentDraft::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "Index fund",
            Money::from_units(300),
            "stocks",
            dec!(-4.5),
        )
    }

    #[test]
    fn test_validate() {
        assert!(draft().validate().is_ok());

        let mut no_type = draft();
        no_type.kind = String::new();
        assert_eq!(no_type.validate(), Err(InvestmentValidationError::EmptyType));
    }

    #[test]
    fn test_validate_rejects_unstorable_precision() {
        let mut precise_returns = draft();
        precise_returns.returns = dec!(3.1415926535897932384);
        assert_eq!(
            precise_returns.validate(),
            Err(InvestmentValidationError::ReturnsTooPrecise)
        );

        let mut precise_amount = draft();
        precise_amount.amount = Money::new(dec!(1234567.123456789012345));
        assert_eq!(
            precise_amount.validate(),
            Err(InvestmentValidationError::AmountTooPrecise)
        );
    }

    #[test]
    fn test_negative_returns_are_allowed() {
        let mut d = draft();
        d.returns = dec!(-250);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_wire_format_uses_type_field() {
        let id = InvestmentId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let inv = Investment::from_draft(id, draft());

        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["type"], "stocks");
        assert_eq!(json["returns"], -4.5);
        assert!(json.get("kind").is_none());

        let back: Investment = serde_json::from_value(json).unwrap();
        assert_eq!(back, inv);
    }
}

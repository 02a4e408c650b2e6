//! Month Summary
//!
//! Totals and balance for one month, recomputed from the entries every time.

use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthlyData};

/// Aggregated totals for a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_investments: Money,
    /// Income minus expenses minus investments
    pub balance: Money,
    pub income_count: usize,
    pub expense_count: usize,
    pub investment_count: usize,
}

impl MonthSummary {
    /// Summarize a month snapshot
    ///
    /// Fails with [`LedgerError::Overflow`] when a total leaves the decimal
    /// range; stored data is not bounded, only new input is.
    pub fn from_month(data: &MonthlyData) -> LedgerResult<Self> {
        let total_income = total("income", data.income.iter().map(|t| t.amount))?;
        let total_expenses = total("expenses", data.expenses.iter().map(|t| t.amount))?;
        let total_investments =
            total("investments", data.investments.iter().map(|i| i.amount))?;
        let balance = total_income
            .checked_sub(total_expenses)
            .and_then(|b| b.checked_sub(total_investments))
            .ok_or_else(|| LedgerError::Overflow("month balance".to_string()))?;

        Ok(Self {
            total_income,
            total_expenses,
            total_investments,
            balance,
            income_count: data.income.len(),
            expense_count: data.expenses.len(),
            investment_count: data.investments.len(),
        })
    }

    /// Whether more went out than came in
    pub fn is_overspent(&self) -> bool {
        self.balance.is_negative()
    }
}

fn total(what: &str, amounts: impl Iterator<Item = Money>) -> LedgerResult<Money> {
    Money::checked_sum(amounts).ok_or_else(|| LedgerError::Overflow(format!("total {}", what)))
}

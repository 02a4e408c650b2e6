//! Month summary formatting

use crate::models::MonthKey;
use crate::reports::MonthSummary;

use super::DisplayOptions;

/// Format a month's totals and balance
pub fn format_month_summary(key: &MonthKey, summary: &MonthSummary, opts: &DisplayOptions) -> String {
    let symbol = &opts.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", key.format_friendly()));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:20} {:>14}  ({})\n",
        "Income:",
        summary.total_income.format_with_symbol(symbol),
        summary.income_count
    ));
    output.push_str(&format!(
        "{:20} {:>14}  ({})\n",
        "Expenses:",
        summary.total_expenses.format_with_symbol(symbol),
        summary.expense_count
    ));
    output.push_str(&format!(
        "{:20} {:>14}  ({})\n",
        "Investments:",
        summary.total_investments.format_with_symbol(symbol),
        summary.investment_count
    ));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:20} {:>14}\n",
        "Balance:",
        summary.balance.format_with_symbol(symbol)
    ));

    if summary.is_overspent() {
        output.push_str("\nMore went out than came in this month.\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthlyData, Transaction, TransactionDraft};
    use chrono::NaiveDate;

    #[test]
    fn test_format_month_summary() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut data = MonthlyData::empty();
        data.expenses.push_new(|id| {
            Transaction::from_draft(
                id,
                TransactionDraft::new(date, "Rent", Money::from_units(1200), "Housing"),
            )
        });

        let text = format_month_summary(
            &MonthKey::new(2024, 3),
            &MonthSummary::from_month(&data).unwrap(),
            &DisplayOptions::default(),
        );

        assert!(text.starts_with("Summary for March 2024"));
        assert!(text.contains("$1200.00"));
        assert!(text.contains("-$1200.00"));
        assert!(text.contains("More went out"));
    }
}

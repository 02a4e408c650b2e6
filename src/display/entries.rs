//! Entry list formatting
//!
//! Register-style tables for a month's income, expenses and investments.

use crate::models::{EntryList, Investment, Transaction, TransactionKind};

use super::DisplayOptions;

/// Format one transaction as a table row
pub fn format_transaction_row(txn: &Transaction, opts: &DisplayOptions) -> String {
    let mut row = format!(
        "{:13} {:10} {:24} {:16} {:>12}",
        txn.id.to_string(),
        txn.date.format(&opts.date_format).to_string(),
        truncate(&txn.description, 24),
        truncate(&txn.category, 16),
        txn.amount.format_with_symbol(&opts.currency_symbol),
    );

    if let Some(method) = &txn.payment_method {
        row.push_str(&format!("  {}", method));
    }

    row
}

/// Format a month's transactions of one kind as a table
pub fn format_transaction_list(
    kind: TransactionKind,
    transactions: &EntryList<Transaction>,
    opts: &DisplayOptions,
) -> String {
    if transactions.is_empty() {
        return format!("No {} recorded.\n", kind.section().to_lowercase());
    }

    let mut output = String::new();
    let mut header = format!(
        "{:13} {:10} {:24} {:16} {:>12}",
        "ID", "Date", "Description", "Category", "Amount"
    );
    if kind.has_payment_method() {
        header.push_str("  Payment");
    }
    output.push_str(&header);
    output.push('\n');
    output.push_str(&"-".repeat(header.len()));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, opts));
        output.push('\n');
    }

    output
}

/// Format one investment as a table row
pub fn format_investment_row(inv: &Investment, opts: &DisplayOptions) -> String {
    format!(
        "{:13} {:10} {:24} {:12} {:>12} {:>8}",
        inv.id.to_string(),
        inv.date.format(&opts.date_format).to_string(),
        truncate(&inv.description, 24),
        truncate(&inv.kind, 12),
        inv.amount.format_with_symbol(&opts.currency_symbol),
        format!("{}%", inv.returns.normalize()),
    )
}

/// Format a month's investments as a table
pub fn format_investment_list(investments: &EntryList<Investment>, opts: &DisplayOptions) -> String {
    if investments.is_empty() {
        return "No investments recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:13} {:10} {:24} {:12} {:>12} {:>8}\n",
        "ID", "Date", "Description", "Type", "Amount", "Returns"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for inv in investments {
        output.push_str(&format_investment_row(inv, opts));
        output.push('\n');
    }

    output
}

/// Details of a single transaction
pub fn format_transaction_details(
    kind: TransactionKind,
    txn: &Transaction,
    opts: &DisplayOptions,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", kind, txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format(&opts.date_format)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&opts.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    if let Some(method) = &txn.payment_method {
        output.push_str(&format!("Payment:     {}\n", method));
    }

    output
}

/// Details of a single investment
pub fn format_investment_details(inv: &Investment, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Investment: {}\n", inv.id));
    output.push_str(&format!("Date:        {}\n", inv.date.format(&opts.date_format)));
    output.push_str(&format!("Description: {}\n", inv.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        inv.amount.format_with_symbol(&opts.currency_symbol)
    ));
    output.push_str(&format!("Type:        {}\n", inv.kind));
    output.push_str(&format!("Returns:     {}%\n", inv.returns.normalize()));

    output
}

/// Truncate a string to a maximum width, padding shorter ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

//! CSV Export functionality
//!
//! Writes one month's entries as spreadsheet-friendly rows, income first,
//! then expenses, then investments, each in display order.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthlyData, TransactionKind};

const HEADER: [&str; 8] = [
    "Section",
    "ID",
    "Date",
    "Description",
    "Amount",
    "Category",
    "Payment Method",
    "Returns",
];

/// Export a month's entries to CSV
pub fn export_month_csv<W: Write>(data: &MonthlyData, writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for kind in [TransactionKind::Income, TransactionKind::Expense] {
        for txn in data.transactions(kind) {
            let id = txn.id.as_uuid().to_string();
            let date = txn.date.to_string();
            let amount = txn.amount.amount().to_string();
            csv_writer
                .write_record([
                    kind.section(),
                    id.as_str(),
                    date.as_str(),
                    txn.description.as_str(),
                    amount.as_str(),
                    txn.category.as_str(),
                    txn.payment_method.as_deref().unwrap_or(""),
                    "",
                ])
                .map_err(export_err)?;
        }
    }

    for inv in &data.investments {
        let id = inv.id.as_uuid().to_string();
        let date = inv.date.to_string();
        let amount = inv.amount.amount().to_string();
        let returns = inv.returns.to_string();
        csv_writer
            .write_record([
                "Investments",
                id.as_str(),
                date.as_str(),
                inv.description.as_str(),
                amount.as_str(),
                inv.kind.as_str(),
                "",
                returns.as_str(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

//! JSON Export functionality
//!
//! Exports one month with its totals and schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthKey, MonthlyData};
use crate::reports::MonthSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A month's entries and totals, as exported
#[derive(Debug, Clone, Serialize)]
pub struct MonthExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub month: MonthKey,
    pub data: MonthlyData,
    pub summary: MonthSummary,
}

impl MonthExport {
    pub fn new(key: &MonthKey, data: &MonthlyData) -> LedgerResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month: key.clone(),
            summary: MonthSummary::from_month(data)?,
            data: data.clone(),
        })
    }
}

/// Export a month to JSON
pub fn export_month_json<W: Write>(
    key: &MonthKey,
    data: &MonthlyData,
    writer: W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = MonthExport::new(key, data)?;

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionDraft};
    use chrono::NaiveDate;

    #[test]
    fn test_export_month_json() {
        let mut data = MonthlyData::empty();
        data.income.push_new(|id| {
            Transaction::from_draft(
                id,
                TransactionDraft::new(
                    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    "Salary",
                    Money::from_units(1000),
                    "Job",
                ),
            )
        });

        let mut out = Vec::new();
        export_month_json(&MonthKey::new(2024, 3), &data, &mut out, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["month"], "2024-03");
        assert_eq!(value["data"]["income"][0]["description"], "Salary");
        assert_eq!(value["summary"]["income_count"], 1);
        assert_eq!(value["summary"]["balance"], 1000.0);
    }
}

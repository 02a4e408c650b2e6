//! YAML Export functionality
//!
//! Same document as the JSON export, in human-readable form.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::MonthExport;
use crate::models::{MonthKey, MonthlyData};

/// Export a month to YAML
pub fn export_month_yaml<W: Write>(
    key: &MonthKey,
    data: &MonthlyData,
    mut writer: W,
) -> LedgerResult<()> {
    let export = MonthExport::new(key, data)?;
    let export_err = |e: std::io::Error| LedgerError::Export(e.to_string());

    writeln!(writer, "# monthbook export for {}", key.format_friendly()).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_month_yaml() {
        let mut out = Vec::new();
        export_month_yaml(&MonthKey::new(2024, 3), &MonthlyData::empty(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# monthbook export for March 2024"));
        assert!(text.contains("month:") && text.contains("2024-03"));
        assert!(text.contains("income: []"));
    }
}

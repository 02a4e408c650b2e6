//! CLI commands for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_month_csv, export_month_json, export_month_yaml};
use crate::models::{MonthKey, MonthlyData};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per entry
    Csv,
    /// JSON, entries plus totals
    Json,
    /// YAML, entries plus totals, human-readable
    Yaml,
}

/// Export a month to a file, or to stdout when no output is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    month: Option<&str>,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let key = MonthKey::parse_or_current(month)?;
    let data = storage.months.get_month(&key)?;

    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_export(format, &key, &data, BufWriter::new(file))?;
            println!(
                "Exported {} ({} entries) to {}",
                key.format_friendly(),
                data.entry_count(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            write_export(format, &key, &data, stdout.lock())?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    format: ExportFormat,
    key: &MonthKey,
    data: &MonthlyData,
    mut writer: W,
) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_month_csv(data, &mut writer)?,
        ExportFormat::Json => {
            export_month_json(key, data, &mut writer, true)?;
            writeln!(writer)?;
        }
        ExportFormat::Yaml => export_month_yaml(key, data, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use monthbook::cli::{
    handle_audit_command, handle_export_command, handle_investment_command,
    handle_months_command, handle_summary_command, handle_transaction_command, ExportFormat,
    InvestmentCommands, TransactionCommands,
};
use monthbook::config::{paths::MonthbookPaths, settings::Settings, DATA_DIR_ENV};
use monthbook::logging::init_tracing;
use monthbook::models::TransactionKind;
use monthbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "monthbook",
    version,
    about = "Month-by-month income, expense and investment tracker",
    long_about = "monthbook records income, expenses and investments per calendar \
                  month and shows each month's totals and balance."
)]
struct Cli {
    /// Base directory for settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income entries
    #[command(subcommand)]
    Income(TransactionCommands),

    /// Expense entries
    #[command(subcommand, alias = "expenses")]
    Expense(TransactionCommands),

    /// Investment entries
    #[command(subcommand, alias = "investments")]
    Investment(InvestmentCommands),

    /// Show a month's totals and balance
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the months that have data
    Months,

    /// Export a month
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only entries for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => MonthbookPaths::with_base_dir(dir),
        None => MonthbookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_transaction_command(&storage, &settings, TransactionKind::Income, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_transaction_command(&storage, &settings, TransactionKind::Expense, cmd)?;
        }
        Some(Commands::Investment(cmd)) => {
            handle_investment_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary { month }) => {
            handle_summary_command(&storage, &settings, month.as_deref())?;
        }
        Some(Commands::Months) => {
            handle_months_command(&storage, &settings)?;
        }
        Some(Commands::Export {
            format,
            month,
            output,
        }) => {
            handle_export_command(&storage, format, month.as_deref(), output)?;
        }
        Some(Commands::Audit { limit, month }) => {
            handle_audit_command(&storage, month.as_deref(), limit)?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("monthbook configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!(
                "Data stored:     {}",
                if storage.has_data()? { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Storage key:     {}", settings.storage_key);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("monthbook - month-by-month finance tracker");
            println!();
            println!("Run 'monthbook --help' for usage information.");
            println!("Run 'monthbook summary' to see the current month.");
        }
    }

    Ok(())
}

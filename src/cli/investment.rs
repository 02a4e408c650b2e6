//! Investment CLI commands

use clap::Subcommand;
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::display::{format_investment_details, format_investment_list, DisplayOptions};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Investment, InvestmentDraft, MonthKey};
use crate::storage::Storage;

use super::{entry_date, parse_amount};

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Add a new investment
    Add {
        /// Description
        description: String,
        /// Amount invested
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Investment type (e.g., "stocks", "bonds")
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Returns in percent
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        returns: Decimal,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Entry date (YYYY-MM-DD), defaults to the first of the month
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the month's investments
    List {
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show one investment
    Show {
        /// Investment ID (full or short form)
        id: String,
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Edit an investment
    Edit {
        /// Investment ID (full or short form)
        id: String,
        #[arg(short, long)]
        month: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        returns: Option<Decimal>,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an investment
    Delete {
        /// Investment ID (full or short form)
        id: String,
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle an investment command
pub fn handle_investment_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InvestmentCommands,
) -> LedgerResult<()> {
    let service = storage.month_service();
    let opts = DisplayOptions::from_settings(settings);

    match cmd {
        InvestmentCommands::Add {
            description,
            amount,
            kind,
            returns,
            month,
            date,
        } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let draft = InvestmentDraft::new(
                entry_date(&key, date.as_deref())?,
                description,
                parse_amount(&amount)?,
                kind,
                returns,
            );
            draft
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            let created = service.add_investment(&key, draft)?;
            println!("Added investment to {}: {}", key.format_friendly(), created.description);
            println!("  Amount: {}", created.amount.format_with_symbol(&opts.currency_symbol));
            println!("  ID: {}", created.id);
        }

        InvestmentCommands::List { month } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let data = service.month(&key)?;
            println!("Investments for {}\n", key.format_friendly());
            print!("{}", format_investment_list(&data.investments, &opts));
        }

        InvestmentCommands::Show { id, month } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let inv = find_investment(storage, &key, &id)?;
            print!("{}", format_investment_details(&inv, &opts));
        }

        InvestmentCommands::Edit {
            id,
            month,
            description,
            amount,
            kind,
            returns,
            date,
        } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let existing = find_investment(storage, &key, &id)?;

            let mut draft = existing.to_draft();
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(kind) = kind {
                draft.kind = kind;
            }
            if let Some(returns) = returns {
                draft.returns = returns;
            }
            if date.is_some() {
                draft.date = entry_date(&key, date.as_deref())?;
            }
            draft
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            let updated = Investment::from_draft(existing.id, draft);
            if !service.edit_investment(&key, updated.clone())? {
                return Err(LedgerError::investment_not_found(id));
            }
            println!("Updated investment: {}", updated.id);
            print!("{}", format_investment_details(&updated, &opts));
        }

        InvestmentCommands::Delete { id, month } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let existing = find_investment(storage, &key, &id)?;

            if !service.delete_investment(&key, existing.id)? {
                return Err(LedgerError::investment_not_found(id));
            }
            println!("Deleted investment: {} ({})", existing.description, existing.id);
        }
    }

    Ok(())
}

fn find_investment(storage: &Storage, key: &MonthKey, id: &str) -> LedgerResult<Investment> {
    storage
        .months
        .get_month(key)?
        .investments
        .resolve(id)?
        .cloned()
        .ok_or_else(|| LedgerError::investment_not_found(id))
}

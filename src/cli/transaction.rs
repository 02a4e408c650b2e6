//! Income and expense CLI commands
//!
//! Both kinds share one command set; the top-level `income` or `expense`
//! command decides which sequence of the month is touched.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_list, DisplayOptions};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthKey, Transaction, TransactionDraft, TransactionKind};
use crate::storage::Storage;

use super::{entry_date, parse_amount};

/// Income/expense subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new entry
    Add {
        /// Description
        description: String,
        /// Amount (e.g., "1200" or "49.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category
        #[arg(short, long)]
        category: String,
        /// Payment method (expenses only)
        #[arg(short, long)]
        payment: Option<String>,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Entry date (YYYY-MM-DD), defaults to the first of the month
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the month's entries
    List {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show one entry
    Show {
        /// Entry ID (full or short form)
        id: String,
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Edit an entry
    Edit {
        /// Entry ID (full or short form)
        id: String,
        #[arg(short, long)]
        month: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New payment method (expenses only)
        #[arg(short, long)]
        payment: Option<String>,
        /// Remove the payment method
        #[arg(long)]
        clear_payment: bool,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID (full or short form)
        id: String,
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle an income or expense command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    kind: TransactionKind,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let service = storage.month_service();
    let opts = DisplayOptions::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            payment,
            month,
            date,
        } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let mut draft = TransactionDraft::new(
                entry_date(&key, date.as_deref())?,
                description,
                parse_amount(&amount)?,
                category,
            );
            if let Some(method) = payment {
                draft = draft.with_payment_method(method);
            }
            draft
                .validate(kind)
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            let created = service.add_transaction(kind, &key, draft)?;
            println!("Added {} to {}: {}", kind, key.format_friendly(), created.description);
            println!("  Amount: {}", created.amount.format_with_symbol(&opts.currency_symbol));
            println!("  ID: {}", created.id);
        }

        TransactionCommands::List { month } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let data = service.month(&key)?;
            println!("{} for {}\n", kind.section(), key.format_friendly());
            print!("{}", format_transaction_list(kind, data.transactions(kind), &opts));
        }

        TransactionCommands::Show { id, month } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let txn = find_transaction(storage, kind, &key, &id)?;
            print!("{}", format_transaction_details(kind, &txn, &opts));
        }

        TransactionCommands::Edit {
            id,
            month,
            description,
            amount,
            category,
            payment,
            clear_payment,
            date,
        } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let existing = find_transaction(storage, kind, &key, &id)?;

            let mut draft = existing.to_draft();
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if clear_payment {
                draft.payment_method = None;
            } else if let Some(method) = payment {
                draft.payment_method = Some(method);
            }
            if date.is_some() {
                draft.date = entry_date(&key, date.as_deref())?;
            }
            draft
                .validate(kind)
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            let updated = Transaction::from_draft(existing.id, draft);
            if !service.edit_transaction(kind, &key, updated.clone())? {
                return Err(LedgerError::transaction_not_found(id));
            }
            println!("Updated {}: {}", kind, updated.id);
            print!("{}", format_transaction_details(kind, &updated, &opts));
        }

        TransactionCommands::Delete { id, month } => {
            let key = MonthKey::parse_or_current(month.as_deref())?;
            let existing = find_transaction(storage, kind, &key, &id)?;

            if !service.delete_transaction(kind, &key, existing.id)? {
                return Err(LedgerError::transaction_not_found(id));
            }
            println!("Deleted {}: {} ({})", kind, existing.description, existing.id);
        }
    }

    Ok(())
}

fn find_transaction(
    storage: &Storage,
    kind: TransactionKind,
    key: &MonthKey,
    id: &str,
) -> LedgerResult<Transaction> {
    storage
        .months
        .get_month(key)?
        .transactions(kind)
        .resolve(id)?
        .cloned()
        .ok_or_else(|| LedgerError::transaction_not_found(id))
}

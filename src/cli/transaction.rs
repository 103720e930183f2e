//! Transaction CLI commands
//!
//! Implements CLI commands for recording and browsing income and expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_transaction_details, format_transaction_list, format_transaction_register,
};
use crate::error::{FinotaError, FinotaResult};
use crate::models::TransactionKind;
use crate::services::{
    CategoryService, CreateTransactionInput, PreferenceService, TransactionFilter,
    TransactionService,
};
use crate::storage::Storage;

use super::{parse_amount, parse_date, parse_optional_date, today};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount, always positive (e.g., "12.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// income or expense; defaults to the category's type, else expense
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only income or only expenses
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Search description and category
        #[arg(short, long)]
        search: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Group by day instead of a table
        #[arg(long)]
        by_date: bool,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New type (income or expense)
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New notes; pass an empty string to clear them
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinotaResult<()> {
    let service = TransactionService::new(storage);
    let category_service = CategoryService::new(storage);
    let currency = PreferenceService::new(storage).formatter()?;
    let date_format = settings.date_format.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            kind,
            date,
            notes,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date) => parse_date(&date)?,
                None => today(),
            };

            let known = category_service.get_by_name(&category)?;
            let kind = kind
                .or_else(|| known.as_ref().map(|c| c.kind))
                .unwrap_or(TransactionKind::Expense);
            if known.is_none() {
                println!("Note: category '{}' does not exist yet", category.trim());
            }

            let txn = service.create(CreateTransactionInput {
                description,
                amount,
                category,
                kind,
                date,
                notes,
            })?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date.format(date_format));
            println!("  Type:     {}", txn.kind);
            println!("  Amount:   {}", currency.format(txn.amount));
            println!("  Category: {}", txn.category);
        }

        TransactionCommands::List {
            kind,
            category,
            search,
            from,
            to,
            limit,
            by_date,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }
            filter.start_date = parse_optional_date(from.as_deref())?;
            filter.end_date = parse_optional_date(to.as_deref())?;

            let transactions = service.list(filter)?;

            if by_date {
                let groups = TransactionService::group_by_date(&transactions);
                print!(
                    "{}",
                    format_transaction_register(&groups, currency, date_format)
                );
            } else {
                print!(
                    "{}",
                    format_transaction_list(&transactions, currency, date_format)
                );
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinotaError::transaction_not_found(&id))?;

            print!(
                "{}",
                format_transaction_details(&txn, currency, date_format)
            );
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
            kind,
            date,
            notes,
        } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinotaError::transaction_not_found(&id))?;

            let mut fields = txn.fields();
            if let Some(description) = description {
                fields.description = description;
            }
            if let Some(amount) = amount {
                fields.amount = parse_amount(&amount)?;
            }
            if let Some(category) = category {
                fields.category = category;
            }
            if let Some(kind) = kind {
                fields.kind = kind;
            }
            if let Some(date) = date {
                fields.date = parse_date(&date)?;
            }
            if let Some(notes) = notes {
                fields.notes = Some(notes);
            }

            let updated = service.update(txn.id, fields)?;

            println!("Updated transaction: {}", updated.id);
            println!("  Description: {}", updated.description);
            println!("  Date:        {}", updated.date.format(date_format));
            println!("  Amount:      {}", currency.format(updated.amount));
            println!("  Category:    {}", updated.category);
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinotaError::transaction_not_found(&id))?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:        {}", txn.date.format(date_format));
                println!("  Description: {}", txn.description);
                println!("  Amount:      {}", currency.format(txn.amount));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if service.delete(txn.id)? {
                println!(
                    "Deleted transaction: {} ({} {})",
                    txn.id,
                    txn.date.format(date_format),
                    txn.description
                );
            }
        }
    }

    Ok(())
}

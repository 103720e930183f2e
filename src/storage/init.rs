//! Storage initialization
//!
//! Handles first-run setup: directories, settings, the default categories
//! and, on request, a small set of sample transactions and reminders.

use chrono::{NaiveDate, NaiveTime};

use crate::config::paths::FinotaPaths;
use crate::config::settings::Settings;
use crate::error::FinotaError;
use crate::models::{
    default_categories, Money, Preferences, Reminder, ReminderFrequency, Transaction,
    TransactionKind,
};

use super::categories::CategoryData;
use super::file_io::write_json_atomic;
use super::reminders::ReminderData;
use super::transactions::TransactionData;

/// What `initialize_storage` created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created_settings: bool,
    pub created_categories: bool,
    pub created_preferences: bool,
    pub sample_transactions: usize,
    pub sample_reminders: usize,
}

/// Initialize storage for a fresh installation
///
/// Existing files are never overwritten. Sample data is only written when
/// the corresponding file does not exist yet.
pub fn initialize_storage(
    paths: &FinotaPaths,
    with_sample_data: bool,
) -> Result<InitReport, FinotaError> {
    paths.ensure_directories()?;

    let mut report = InitReport::default();

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        report.created_settings = true;
    }

    if !paths.categories_file().exists() {
        write_json_atomic(
            paths.categories_file(),
            &CategoryData {
                categories: default_categories(),
            },
        )?;
        report.created_categories = true;
    }

    if !paths.preferences_file().exists() {
        write_json_atomic(paths.preferences_file(), &Preferences::default())?;
        report.created_preferences = true;
    }

    if with_sample_data {
        if !paths.transactions_file().exists() {
            let transactions = sample_transactions();
            report.sample_transactions = transactions.len();
            write_json_atomic(paths.transactions_file(), &TransactionData { transactions })?;
        }

        if !paths.reminders_file().exists() {
            let reminders = sample_reminders();
            report.sample_reminders = reminders.len();
            write_json_atomic(paths.reminders_file(), &ReminderData { reminders })?;
        }
    }

    tracing::info!(base = %paths.base_dir().display(), ?report, "storage initialized");
    Ok(report)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FinotaPaths) -> bool {
    !paths.is_initialized()
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The sample transactions written by `init --sample-data`
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(
            "Salary",
            Money::from_units(5000, 0),
            "Salary",
            TransactionKind::Income,
            ymd(2024, 1, 15),
        )
        .with_notes("Monthly salary"),
        Transaction::new(
            "Groceries",
            Money::from_units(120, 0),
            "Food",
            TransactionKind::Expense,
            ymd(2024, 1, 14),
        ),
        Transaction::new(
            "Coffee",
            Money::from_units(4, 50),
            "Food",
            TransactionKind::Expense,
            ymd(2024, 1, 14),
        ),
    ]
}

/// The sample reminders written by `init --sample-data`
pub fn sample_reminders() -> Vec<Reminder> {
    vec![
        Reminder::new(
            "Pay Rent",
            "Don't forget to pay monthly rent",
            hm(9, 0),
            ReminderFrequency::Monthly,
        ),
        Reminder::new(
            "Check Expenses",
            "Review daily expenses",
            hm(20, 0),
            ReminderFrequency::Daily,
        ),
    ]
}

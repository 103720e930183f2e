//! Storage layer for Finota
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. A data file that cannot be parsed is logged and replaced by
//! defaults for the session; the file itself is only rewritten on the next
//! save.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod preferences;
pub mod reminders;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, InitReport};
pub use preferences::PreferenceRepository;
pub use reminders::ReminderRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::FinotaPaths;
use crate::error::FinotaError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinotaPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub reminders: ReminderRepository,
    pub preferences: PreferenceRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinotaPaths) -> Result<Self, FinotaError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            reminders: ReminderRepository::new(paths.reminders_file()),
            preferences: PreferenceRepository::new(paths.preferences_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinotaPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Parse failures fall back to defaults with a warning; only failures to
    /// reset the in-memory state are returned.
    pub fn load_all(&mut self) -> Result<(), FinotaError> {
        if let Err(e) = self.transactions.load() {
            tracing::warn!(error = %e, "could not load transactions, starting empty");
            self.transactions.replace_all(Vec::new())?;
        }
        if let Err(e) = self.categories.load() {
            tracing::warn!(error = %e, "could not load categories, using defaults");
            self.categories.reset()?;
        }
        if let Err(e) = self.reminders.load() {
            tracing::warn!(error = %e, "could not load reminders, starting empty");
            self.reminders.replace_all(Vec::new())?;
        }
        if let Err(e) = self.preferences.load() {
            tracing::warn!(error = %e, "could not load preferences, using defaults");
            self.preferences.reset()?;
        }
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinotaError> {
        self.transactions.save()?;
        self.categories.save()?;
        self.reminders.save()?;
        self.preferences.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money, Reminder, ReminderFrequency, Transaction, TransactionKind};
    use chrono::{NaiveDate, NaiveTime, Weekday};
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_and_reload_everything() {
        let (temp_dir, mut storage) = create_storage();
        storage.load_all().unwrap();

        storage
            .transactions
            .upsert(Transaction::new(
                "Lunch",
                Money::from_cents(1250),
                "Food",
                TransactionKind::Expense,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ))
            .unwrap();
        let mut reminder = Reminder::new(
            "Log spending",
            "Add today's receipts",
            NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            ReminderFrequency::Daily,
        );
        reminder.set_schedule(ReminderFrequency::Custom, vec![Weekday::Thu, Weekday::Mon]);
        storage.reminders.upsert(reminder).unwrap();
        let mut prefs = storage.preferences.get().unwrap();
        prefs.currency = Currency::Eur;
        storage.preferences.set(prefs).unwrap();
        storage.save_all().unwrap();

        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();

        assert_eq!(
            reloaded.transactions.get_all().unwrap(),
            storage.transactions.get_all().unwrap()
        );
        assert_eq!(
            reloaded.categories.get_all().unwrap(),
            storage.categories.get_all().unwrap()
        );
        let reminders = reloaded.reminders.get_all().unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders, storage.reminders.get_all().unwrap());
        assert_eq!(reminders[0].custom_days, vec![Weekday::Mon, Weekday::Thu]);
        assert_eq!(reloaded.preferences.get().unwrap().currency, Currency::Eur);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let (temp_dir, mut storage) = create_storage();
        let txn_file = temp_dir.path().join("data").join("transactions.json");
        let cat_file = temp_dir.path().join("data").join("categories.json");
        std::fs::write(&txn_file, "{ not json").unwrap();
        std::fs::write(&cat_file, "[1, 2, 3]").unwrap();

        storage.load_all().unwrap();

        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.categories.count().unwrap(), 10);
        // The broken file is left alone until something is saved
        assert_eq!(std::fs::read_to_string(&txn_file).unwrap(), "{ not json");
    }
}

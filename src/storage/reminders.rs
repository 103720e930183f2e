//! Reminder repository for JSON storage
//!
//! Manages loading and saving reminders to reminders.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinotaError;
use crate::models::{Reminder, ReminderId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable reminder data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ReminderData {
    pub reminders: Vec<Reminder>,
}

/// Repository for reminder persistence
pub struct ReminderRepository {
    path: PathBuf,
    reminders: RwLock<HashMap<ReminderId, Reminder>>,
}

impl ReminderRepository {
    /// Create a new reminder repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            reminders: RwLock::new(HashMap::new()),
        }
    }

    /// Load reminders from disk
    pub fn load(&self) -> Result<(), FinotaError> {
        let file_data: ReminderData = read_json(&self.path)?;
        self.replace_all(file_data.reminders)
    }

    /// Replace the in-memory contents
    pub fn replace_all(&self, list: Vec<Reminder>) -> Result<(), FinotaError> {
        let mut reminders = self
            .reminders
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        reminders.clear();
        for reminder in list {
            reminders.insert(reminder.id, reminder);
        }

        Ok(())
    }

    /// Save reminders to disk
    pub fn save(&self) -> Result<(), FinotaError> {
        let reminders = self.get_all()?;
        write_json_atomic(&self.path, &ReminderData { reminders })
    }

    /// Get a reminder by ID
    pub fn get(&self, id: ReminderId) -> Result<Option<Reminder>, FinotaError> {
        let reminders = self
            .reminders
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(reminders.get(&id).cloned())
    }

    /// Get all reminders ordered by time of day, then title
    pub fn get_all(&self) -> Result<Vec<Reminder>, FinotaError> {
        let reminders = self
            .reminders
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = reminders.values().cloned().collect();
        list.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.title.cmp(&b.title)));
        Ok(list)
    }

    /// Find reminders whose ID matches a short ID or UUID prefix
    pub fn find_by_prefix(&self, identifier: &str) -> Result<Vec<Reminder>, FinotaError> {
        let mut list = self.get_all()?;
        list.retain(|r| r.id.matches_prefix(identifier));
        Ok(list)
    }

    /// Insert or update a reminder
    pub fn upsert(&self, reminder: Reminder) -> Result<(), FinotaError> {
        let mut reminders = self
            .reminders
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        reminders.insert(reminder.id, reminder);
        Ok(())
    }

    /// Delete a reminder, returning whether it existed
    pub fn delete(&self, id: ReminderId) -> Result<bool, FinotaError> {
        let mut reminders = self
            .reminders
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(reminders.remove(&id).is_some())
    }

    /// Count reminders
    pub fn count(&self) -> Result<usize, FinotaError> {
        let reminders = self
            .reminders
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(reminders.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReminderFrequency;
    use chrono::{NaiveTime, Weekday};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ReminderRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reminders.json");
        let repo = ReminderRepository::new(path);
        (temp_dir, repo)
    }

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_ordered_by_time() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Reminder::new("Evening", "m", at(20), ReminderFrequency::Daily))
            .unwrap();
        repo.upsert(Reminder::new("Morning", "m", at(9), ReminderFrequency::Monthly))
            .unwrap();

        let titles: Vec<_> = repo.get_all().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Morning", "Evening"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let mut gym = Reminder::new("Gym", "Pay the fee", at(7), ReminderFrequency::Daily);
        gym.set_schedule(ReminderFrequency::Custom, vec![Weekday::Mon, Weekday::Fri]);
        gym.set_active(false);
        repo.upsert(gym).unwrap();
        repo.save().unwrap();

        let repo2 = ReminderRepository::new(temp_dir.path().join("reminders.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap(), repo.get_all().unwrap());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let reminder = Reminder::new("Rent", "Pay", at(9), ReminderFrequency::Monthly);
        let id = reminder.id;
        repo.upsert(reminder).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
    }
}

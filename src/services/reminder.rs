//! Reminder service
//!
//! CRUD and activation for reminders. Reminders are stored configurations
//! only; `test` renders the notification a reminder would show.

use chrono::{NaiveTime, Weekday};

use crate::error::{FinotaError, FinotaResult};
use crate::models::{Notification, Reminder, ReminderFrequency, ReminderId};
use crate::storage::Storage;

/// Service for reminder management
pub struct ReminderService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new reminder
#[derive(Debug, Clone)]
pub struct CreateReminderInput {
    pub title: String,
    pub message: String,
    pub time: NaiveTime,
    pub frequency: ReminderFrequency,
    /// Days of the week, used only by custom reminders
    pub custom_days: Vec<Weekday>,
}

/// Changes to apply to a reminder; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ReminderUpdate {
    pub title: Option<String>,
    pub message: Option<String>,
    pub time: Option<NaiveTime>,
    pub frequency: Option<ReminderFrequency>,
    pub custom_days: Option<Vec<Weekday>>,
}

impl<'a> ReminderService<'a> {
    /// Create a new reminder service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new, active reminder
    pub fn create(&self, input: CreateReminderInput) -> FinotaResult<Reminder> {
        let mut reminder = Reminder::new(
            input.title.trim(),
            input.message.trim(),
            input.time,
            input.frequency,
        );
        reminder.set_schedule(input.frequency, input.custom_days);

        reminder
            .validate()
            .map_err(|e| FinotaError::Validation(e.to_string()))?;

        self.storage.reminders.upsert(reminder.clone())?;
        self.storage.reminders.save()?;

        tracing::debug!(id = %reminder.id, title = %reminder.title, "created reminder");
        Ok(reminder)
    }

    /// Get a reminder by ID
    pub fn get(&self, id: ReminderId) -> FinotaResult<Option<Reminder>> {
        self.storage.reminders.get(id)
    }

    /// Find a reminder by full ID, short ID, unique ID prefix or exact title
    /// (case-insensitive)
    pub fn find(&self, identifier: &str) -> FinotaResult<Option<Reminder>> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<ReminderId>() {
            return self.storage.reminders.get(id);
        }

        let mut matches = self.storage.reminders.find_by_prefix(identifier)?;
        if matches.is_empty() {
            matches = self
                .storage
                .reminders
                .get_all()?
                .into_iter()
                .filter(|r| r.title.eq_ignore_ascii_case(identifier))
                .collect();
        }

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(FinotaError::Ambiguous {
                entity_type: "Reminder",
                identifier: identifier.to_string(),
                matches: n,
            }),
        }
    }

    /// List all reminders, ordered by time of day
    pub fn list(&self) -> FinotaResult<Vec<Reminder>> {
        self.storage.reminders.get_all()
    }

    /// Update a reminder
    pub fn update(&self, id: ReminderId, update: ReminderUpdate) -> FinotaResult<Reminder> {
        let mut reminder = self.require(id)?;

        if let Some(title) = update.title {
            reminder.title = title.trim().to_string();
        }
        if let Some(message) = update.message {
            reminder.message = message.trim().to_string();
        }
        if let Some(time) = update.time {
            reminder.time = time;
        }
        if update.frequency.is_some() || update.custom_days.is_some() {
            let frequency = update.frequency.unwrap_or(reminder.frequency);
            let days = update
                .custom_days
                .unwrap_or_else(|| reminder.custom_days.clone());
            reminder.set_schedule(frequency, days);
        }
        reminder.updated_at = chrono::Utc::now();

        reminder
            .validate()
            .map_err(|e| FinotaError::Validation(e.to_string()))?;

        self.storage.reminders.upsert(reminder.clone())?;
        self.storage.reminders.save()?;

        Ok(reminder)
    }

    /// Flip a reminder between active and inactive
    pub fn toggle(&self, id: ReminderId) -> FinotaResult<Reminder> {
        let mut reminder = self.require(id)?;
        reminder.toggle();
        self.store(reminder)
    }

    /// Switch a reminder on or off
    pub fn set_active(&self, id: ReminderId, active: bool) -> FinotaResult<Reminder> {
        let mut reminder = self.require(id)?;
        reminder.set_active(active);
        self.store(reminder)
    }

    /// Delete a reminder, returning whether anything was removed
    pub fn delete(&self, id: ReminderId) -> FinotaResult<bool> {
        let removed = self.storage.reminders.delete(id)?;
        if removed {
            self.storage.reminders.save()?;
        }
        Ok(removed)
    }

    /// The notification a reminder shows when fired
    pub fn test(&self, id: ReminderId) -> FinotaResult<Notification> {
        let reminder = self.require(id)?;
        if !reminder.active {
            tracing::info!(title = %reminder.title, "testing an inactive reminder");
        }
        Ok(reminder.notification())
    }

    /// Count all reminders
    pub fn count(&self) -> FinotaResult<usize> {
        self.storage.reminders.count()
    }

    fn require(&self, id: ReminderId) -> FinotaResult<Reminder> {
        self.storage
            .reminders
            .get(id)?
            .ok_or_else(|| FinotaError::reminder_not_found(id.to_string()))
    }

    fn store(&self, reminder: Reminder) -> FinotaResult<Reminder> {
        self.storage.reminders.upsert(reminder.clone())?;
        self.storage.reminders.save()?;
        Ok(reminder)
    }
}

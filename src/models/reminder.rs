//! Reminder model
//!
//! Reminders are stored configurations only. Nothing schedules them; a
//! reminder can be fired by hand to preview its notification.

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ReminderId;

/// How often a reminder repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    /// Specific days of the week, listed in `custom_days`
    Custom,
}

impl fmt::Display for ReminderFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

impl FromStr for ReminderFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "custom" => Ok(Self::Custom),
            other => Err(format!(
                "Unknown frequency '{}': expected daily, weekly, monthly or custom",
                other
            )),
        }
    }
}

/// A notification a reminder would show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// A financial reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier
    pub id: ReminderId,

    pub title: String,

    pub message: String,

    /// Time of day, stored as `HH:MM`
    #[serde(with = "time_of_day")]
    pub time: NaiveTime,

    pub frequency: ReminderFrequency,

    /// Days of the week for custom reminders; empty otherwise
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_days: Vec<Weekday>,

    /// Whether the reminder is switched on
    #[serde(default = "default_active")]
    pub active: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Reminder {
    /// Create a new, active reminder
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        time: NaiveTime,
        frequency: ReminderFrequency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ReminderId::new(),
            title: title.into(),
            message: message.into(),
            time,
            frequency,
            custom_days: Vec::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the frequency, keeping custom days only for custom reminders
    pub fn set_schedule(&mut self, frequency: ReminderFrequency, days: Vec<Weekday>) {
        self.frequency = frequency;
        self.custom_days = if frequency == ReminderFrequency::Custom {
            normalize_days(days)
        } else {
            Vec::new()
        };
        self.updated_at = Utc::now();
    }

    /// Flip the active flag
    pub fn toggle(&mut self) {
        self.set_active(!self.active);
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }

    /// Human-readable schedule, e.g. "Daily at 09:00" or "Mon, Thu at 20:00"
    pub fn schedule_label(&self) -> String {
        let when = match self.frequency {
            ReminderFrequency::Custom if !self.custom_days.is_empty() => self
                .custom_days
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };
        format!("{} at {}", when, self.time.format("%H:%M"))
    }

    /// The notification this reminder shows when fired
    pub fn notification(&self) -> Notification {
        Notification {
            title: self.title.clone(),
            body: self.message.clone(),
        }
    }

    /// Validate the reminder
    pub fn validate(&self) -> Result<(), ReminderValidationError> {
        if self.title.trim().is_empty() {
            return Err(ReminderValidationError::EmptyTitle);
        }

        if self.message.trim().is_empty() {
            return Err(ReminderValidationError::EmptyMessage);
        }

        if self.frequency == ReminderFrequency::Custom && self.custom_days.is_empty() {
            return Err(ReminderValidationError::NoCustomDays);
        }

        Ok(())
    }
}

/// Sort days Monday-first and drop duplicates
fn normalize_days(mut days: Vec<Weekday>) -> Vec<Weekday> {
    days.sort_by_key(|d| d.num_days_from_monday());
    days.dedup();
    days
}

/// Parse an `HH:MM` (or `HH:MM:SS`) time of day
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time '{}': expected HH:MM", s))
}

mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time_of_day(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.schedule_label())
    }
}

/// Validation errors for reminders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderValidationError {
    EmptyTitle,
    EmptyMessage,
    NoCustomDays,
}

impl fmt::Display for ReminderValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Reminder title is required"),
            Self::EmptyMessage => write!(f, "Reminder message is required"),
            Self::NoCustomDays => {
                write!(f, "Custom reminders need at least one day of the week")
            }
        }
    }
}

impl std::error::Error for ReminderValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_new_reminder_is_active() {
        let reminder = Reminder::new("Pay Rent", "Monthly rent", nine(), ReminderFrequency::Monthly);
        assert!(reminder.active);
        assert!(reminder.custom_days.is_empty());
        assert_eq!(reminder.schedule_label(), "Monthly at 09:00");
    }

    #[test]
    fn test_toggle() {
        let mut reminder = Reminder::new("Check", "Review", nine(), ReminderFrequency::Daily);
        reminder.toggle();
        assert!(!reminder.active);
        reminder.toggle();
        assert!(reminder.active);
    }

    #[test]
    fn test_custom_schedule() {
        let mut reminder = Reminder::new("Gym", "Pay fee", nine(), ReminderFrequency::Daily);
        reminder.set_schedule(
            ReminderFrequency::Custom,
            vec![Weekday::Thu, Weekday::Mon, Weekday::Thu],
        );
        assert_eq!(reminder.custom_days, vec![Weekday::Mon, Weekday::Thu]);
        assert_eq!(reminder.schedule_label(), "Mon, Thu at 09:00");

        reminder.set_schedule(ReminderFrequency::Weekly, vec![Weekday::Fri]);
        assert!(reminder.custom_days.is_empty());
    }

    #[test]
    fn test_validation() {
        let mut reminder = Reminder::new("", "msg", nine(), ReminderFrequency::Daily);
        assert_eq!(reminder.validate(), Err(ReminderValidationError::EmptyTitle));

        reminder.title = "Title".into();
        reminder.message = " ".into();
        assert_eq!(reminder.validate(), Err(ReminderValidationError::EmptyMessage));

        reminder.message = "msg".into();
        reminder.frequency = ReminderFrequency::Custom;
        assert_eq!(reminder.validate(), Err(ReminderValidationError::NoCustomDays));
    }

    #[test]
    fn test_notification() {
        let reminder = Reminder::new("Pay Rent", "Don't forget", nine(), ReminderFrequency::Monthly);
        let notification = reminder.notification();
        assert_eq!(notification.title, "Pay Rent");
        assert_eq!(notification.body, "Don't forget");
    }

    #[test]
    fn test_time_serialization() {
        let mut reminder = Reminder::new("Gym", "Pay", nine(), ReminderFrequency::Daily);
        reminder.set_schedule(ReminderFrequency::Custom, vec![Weekday::Wed]);

        let json = serde_json::to_string(&reminder).unwrap();
        assert!(json.contains("\"time\":\"09:00\""));
        assert!(json.contains("\"frequency\":\"custom\""));

        let loaded: Reminder = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, reminder);
    }

    #[test]
    fn test_parse_time_of_day() {
        assert_eq!(parse_time_of_day("20:00").unwrap(), NaiveTime::from_hms_opt(20, 0, 0).unwrap());
        assert!(parse_time_of_day("25:00").is_err());
        assert!(parse_time_of_day("noon").is_err());
    }
}

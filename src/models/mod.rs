//! Core data models for Finota
//!
//! This module contains the data structures of the finance domain:
//! transactions, categories, reminders and display preferences.

pub mod category;
pub mod currency;
pub mod ids;
pub mod kind;
pub mod money;
pub mod preferences;
pub mod reminder;
pub mod transaction;

pub use category::{default_categories, Category};
pub use currency::Currency;
pub use ids::{CategoryId, ReminderId, TransactionId};
pub use kind::TransactionKind;
pub use money::Money;
pub use preferences::{Language, Preferences, Theme};
pub use reminder::{Notification, Reminder, ReminderFrequency};
pub use transaction::{Transaction, TransactionFields};

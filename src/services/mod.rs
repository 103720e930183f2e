//! Service layer for Finota
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, lookups by short identifiers, and cross-entity
//! operations such as category renames.

pub mod category;
pub mod preferences;
pub mod reminder;
pub mod transaction;

pub use category::{CategoryService, CategoryUpdate, CreateCategoryInput, DeletePolicy};
pub use preferences::PreferenceService;
pub use reminder::{CreateReminderInput, ReminderService, ReminderUpdate};
pub use transaction::{CreateTransactionInput, DateGroup, TransactionFilter, TransactionService};

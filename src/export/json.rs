//! JSON export
//!
//! Exports the complete data set to a single JSON document with a schema
//! version.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinotaError, FinotaResult};
use crate::models::{Category, Preferences, Reminder, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub reminders: Vec<Reminder>,
    pub preferences: Preferences,

    pub metadata: ExportMetadata,
}

/// Counts and date span of the exported data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub reminder_count: usize,

    /// Date of the earliest transaction
    pub earliest_transaction: Option<String>,

    /// Date of the latest transaction
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot everything currently held by storage
    pub fn from_storage(storage: &Storage) -> FinotaResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let reminders = storage.reminders.get_all()?;
        let preferences = storage.preferences.get()?;

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: categories.len(),
            reminder_count: reminders.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            categories,
            reminders,
            preferences,
            metadata,
        })
    }
}

/// Export everything as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> FinotaResult<FullExport> {
    let export = FullExport::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FinotaError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinotaError::Export(e.to_string()))?;

    Ok(export)
}

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod export;
pub mod init;
pub mod preference;
pub mod reminder;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use init::{handle_config_command, handle_init_command};
pub use preference::{handle_preference_command, PreferenceCommands};
pub use reminder::{handle_reminder_command, ReminderCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FinotaError, FinotaResult};
use crate::models::Money;

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(value: &str) -> FinotaResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        FinotaError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

/// Parse an optional date argument
pub(crate) fn parse_optional_date(value: Option<&str>) -> FinotaResult<Option<NaiveDate>> {
    value.map(parse_date).transpose()
}

/// Parse an amount argument such as `12.50` or `1,200`
pub(crate) fn parse_amount(value: &str) -> FinotaResult<Money> {
    Money::parse(value).map_err(|e| {
        FinotaError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '12.50' or '100'. Error: {}",
            value, e
        ))
    })
}

/// Today's date in the local timezone
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

//! Display formatting for terminal output
//!
//! Lists are rendered as tables with `tabled`; single entities and reports
//! use plain aligned text. Every amount goes through the currency of the
//! current preferences.

pub mod category;
pub mod preferences;
pub mod reminder;
pub mod report;
pub mod transaction;

pub use category::{format_category_details, format_category_list};
pub use preferences::{format_currency_list, format_preferences};
pub use reminder::{format_notification, format_reminder_details, format_reminder_list};
pub use report::{
    format_breakdown, format_dashboard, format_monthly_totals, format_period_report,
};
pub use transaction::{
    format_transaction_details, format_transaction_list, format_transaction_register,
};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows as a rounded table
pub(crate) fn table<T: Tabled>(rows: Vec<T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Truncate a string to a maximum number of characters with ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

//! Export functionality
//!
//! Transactions can be exported as CSV for spreadsheets; the complete data
//! set can be exported as JSON or YAML.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_transactions_csv, write_transactions_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

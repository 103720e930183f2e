//! Finota - personal finance tracker
//!
//! This library provides the core functionality for the Finota application:
//! recording income and expenses, organising them into categories, reporting
//! on them, display preferences and simple financial reminders. All data is
//! stored locally as JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, reminders, preferences)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Summaries, category breakdowns and period statistics
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `finota` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finota::config::paths::FinotaPaths;
//! use finota::storage::Storage;
//!
//! let mut storage = Storage::new(FinotaPaths::new()?)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinotaError, FinotaResult};

//! Configuration module for Finota
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Application settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinotaPaths;
pub use settings::Settings;

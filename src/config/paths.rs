//! Path management for Finota
//!
//! Resolves where configuration and data files live.
//!
//! ## Path Resolution Order
//!
//! 1. `FINOTA_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `finota`
//!    (`~/.config/finota` on Linux, `~/Library/Application Support/finota`
//!    on macOS, `%APPDATA%\finota\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinotaError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINOTA_DATA_DIR";

/// Manages all paths used by Finota
#[derive(Debug, Clone)]
pub struct FinotaPaths {
    /// Base directory for all Finota data
    base_dir: PathBuf,
}

impl FinotaPaths {
    /// Create a new FinotaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, FinotaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinotaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to reminders.json
    pub fn reminders_file(&self) -> PathBuf {
        self.data_dir().join("reminders.json")
    }

    /// Get the path to preferences.json (theme, language, currency)
    pub fn preferences_file(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinotaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinotaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinotaError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Finota has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FinotaError> {
    ProjectDirs::from("", "", "finota")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            FinotaError::Config(format!(
                "Could not determine a home directory; set {} explicitly",
                DATA_DIR_ENV
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = FinotaPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinotaPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
        assert_eq!(
            paths.preferences_file(),
            temp_dir.path().join("data").join("preferences.json")
        );
    }
}

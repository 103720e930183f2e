//! Preference repository for JSON storage
//!
//! Holds the single preference set stored in preferences.json

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinotaError;
use crate::models::Preferences;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the user's display preferences
pub struct PreferenceRepository {
    path: PathBuf,
    data: RwLock<Preferences>,
}

impl PreferenceRepository {
    /// Create a new preference repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Preferences::default()),
        }
    }

    /// Load preferences from disk
    pub fn load(&self) -> Result<(), FinotaError> {
        let prefs: Preferences = read_json(&self.path)?;
        self.set(prefs)
    }

    /// Save preferences to disk
    pub fn save(&self) -> Result<(), FinotaError> {
        let prefs = self.get()?;
        write_json_atomic(&self.path, &prefs)
    }

    /// Get the current preferences
    pub fn get(&self) -> Result<Preferences, FinotaError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(*data)
    }

    /// Replace the current preferences
    pub fn set(&self, prefs: Preferences) -> Result<(), FinotaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = prefs;
        Ok(())
    }

    /// Restore every preference to its default
    pub fn reset(&self) -> Result<(), FinotaError> {
        self.set(Preferences::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Language, Theme};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let repo = PreferenceRepository::new(temp_dir.path().join("preferences.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        let repo = PreferenceRepository::new(path.clone());
        let prefs = Preferences {
            theme: Theme::Dark,
            language: Language::Es,
            currency: Currency::Gbp,
        };
        repo.set(prefs).unwrap();
        repo.save().unwrap();

        let repo2 = PreferenceRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap(), prefs);
    }

    #[test]
    fn test_reset() {
        let temp_dir = TempDir::new().unwrap();
        let repo = PreferenceRepository::new(temp_dir.path().join("preferences.json"));
        repo.set(Preferences {
            theme: Theme::Light,
            ..Preferences::default()
        })
        .unwrap();
        repo.reset().unwrap();
        assert_eq!(repo.get().unwrap().theme, Theme::System);
    }
}

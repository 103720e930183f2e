//! Application settings for Finota
//!
//! Settings control how data is presented and summarised (date format,
//! week start, list sizes). User display preferences such as theme and
//! currency live in [`crate::models::Preferences`] instead.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::FinotaPaths;
use crate::error::FinotaError;

/// Application settings persisted in `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// How many transactions the dashboard lists as "recent"
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,

    /// How many categories the statistics view keeps
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

fn default_recent_count() -> usize {
    5
}

fn default_top_categories() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            first_day_of_week: default_first_day_of_week(),
            recent_count: default_recent_count(),
            top_categories: default_top_categories(),
        }
    }
}

impl Settings {
    /// The configured first day of the week
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinotaPaths) -> Result<Self, FinotaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinotaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinotaError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinotaPaths) -> Result<(), FinotaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinotaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinotaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.week_start(), Weekday::Sun);
        assert_eq!(settings.recent_count, 5);
        assert_eq!(settings.top_categories, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            first_day_of_week: 1,
            recent_count: 10,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.week_start(), Weekday::Mon);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"recent_count": 3}"#).unwrap();
        assert_eq!(settings.recent_count, 3);
        assert_eq!(settings.top_categories, 5);
        assert_eq!(settings.schema_version, 1);
    }
}

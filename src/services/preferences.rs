//! Preference service
//!
//! Reads and changes the user's theme, language and currency. Every change
//! is persisted immediately.

use crate::error::{FinotaError, FinotaResult};
use crate::models::{Currency, Language, Preferences, Theme};
use crate::storage::Storage;

/// Service for display preferences
pub struct PreferenceService<'a> {
    storage: &'a Storage,
}

impl<'a> PreferenceService<'a> {
    /// Create a new preference service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current preferences
    pub fn get(&self) -> FinotaResult<Preferences> {
        self.storage.preferences.get()
    }

    pub fn set_theme(&self, theme: Theme) -> FinotaResult<Preferences> {
        self.modify(|prefs| prefs.theme = theme)
    }

    pub fn set_language(&self, language: Language) -> FinotaResult<Preferences> {
        self.modify(|prefs| prefs.language = language)
    }

    /// Set the currency from an ISO code (case-insensitive)
    pub fn set_currency(&self, code: &str) -> FinotaResult<Preferences> {
        let currency = Currency::from_code(code).ok_or_else(|| {
            FinotaError::Validation(format!(
                "Unsupported currency '{}'. Supported: {}",
                code.trim(),
                Currency::all()
                    .iter()
                    .map(|c| c.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;
        self.modify(|prefs| prefs.currency = currency)
    }

    /// Restore every preference to its default
    pub fn reset(&self) -> FinotaResult<Preferences> {
        self.storage.preferences.reset()?;
        self.storage.preferences.save()?;
        self.get()
    }

    /// The currency used to render amounts
    pub fn formatter(&self) -> FinotaResult<Currency> {
        Ok(self.get()?.currency)
    }

    fn modify(&self, change: impl FnOnce(&mut Preferences)) -> FinotaResult<Preferences> {
        let mut prefs = self.storage.preferences.get()?;
        change(&mut prefs);
        self.storage.preferences.set(prefs)?;
        self.storage.preferences.save()?;
        tracing::debug!(?prefs, "preferences updated");
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinotaPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_defaults() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PreferenceService::new(&storage);
        assert_eq!(service.get().unwrap(), Preferences::default());
    }

    #[test]
    fn test_changes_are_independent_and_persisted() {
        let (temp_dir, storage) = create_test_storage();
        let service = PreferenceService::new(&storage);

        service.set_theme(Theme::Dark).unwrap();
        service.set_language(Language::Fr).unwrap();
        let prefs = service.set_currency("idr").unwrap();

        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::Fr);
        assert_eq!(prefs.currency, Currency::Idr);

        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.preferences.get().unwrap(), prefs);
    }

    #[test]
    fn test_unsupported_currency() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PreferenceService::new(&storage);

        let err = service.set_currency("BTC").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get().unwrap().currency, Currency::Usd);
    }

    #[test]
    fn test_reset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PreferenceService::new(&storage);

        service.set_theme(Theme::Light).unwrap();
        service.set_currency("EUR").unwrap();
        assert_eq!(service.reset().unwrap(), Preferences::default());
    }

    #[test]
    fn test_formatter_follows_currency() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PreferenceService::new(&storage);
        let amount = Money::from_units(1234, 50);

        assert_eq!(service.formatter().unwrap().format(amount), "$1,234.50");
        service.set_currency("IDR").unwrap();
        assert_eq!(service.formatter().unwrap().format(amount), "Rp1,235");
    }
}

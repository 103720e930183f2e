//! Preference CLI commands

use clap::Subcommand;

use crate::display::{format_currency_list, format_preferences};
use crate::error::FinotaResult;
use crate::models::{Language, Theme};
use crate::services::PreferenceService;
use crate::storage::Storage;

/// Preference subcommands
#[derive(Subcommand)]
pub enum PreferenceCommands {
    /// Show current preferences
    Show,
    /// Set the theme (light, dark, system)
    Theme {
        theme: Theme,
    },
    /// Set the language (en, id, es, fr)
    Language {
        language: Language,
    },
    /// Set the display currency by ISO code (e.g., USD, IDR)
    Currency {
        code: String,
    },
    /// List supported currencies
    Currencies,
    /// Restore default preferences
    Reset,
}

/// Handle a preference command
pub fn handle_preference_command(storage: &Storage, cmd: PreferenceCommands) -> FinotaResult<()> {
    let service = PreferenceService::new(storage);

    match cmd {
        PreferenceCommands::Show => {
            print!("{}", format_preferences(&service.get()?));
        }
        PreferenceCommands::Theme { theme } => {
            let prefs = service.set_theme(theme)?;
            println!("Theme set to {}", prefs.theme);
        }
        PreferenceCommands::Language { language } => {
            let prefs = service.set_language(language)?;
            println!("Language set to {}", prefs.language);
        }
        PreferenceCommands::Currency { code } => {
            let prefs = service.set_currency(&code)?;
            println!(
                "Currency set to {} ({})",
                prefs.currency.code(),
                prefs.currency.name()
            );
        }
        PreferenceCommands::Currencies => {
            print!("{}", format_currency_list(service.formatter()?));
        }
        PreferenceCommands::Reset => {
            service.reset()?;
            println!("Preferences restored to defaults.");
        }
    }

    Ok(())
}

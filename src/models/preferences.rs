//! Display preferences: theme, language and currency
//!
//! The three preferences are independent. When one persisted value is
//! missing or unrecognised only that preference falls back to its default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::currency::Currency;

/// Colour theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl Theme {
    pub fn all() -> &'static [Self] {
        &[Self::Light, Self::Dark, Self::System]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
            Self::System => write!(f, "System"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" | "auto" => Ok(Self::System),
            other => Err(format!(
                "Unknown theme '{}': expected light, dark or system",
                other
            )),
        }
    }
}

/// Interface language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
    Es,
    Fr,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Id, Self::Es, Self::Fr]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Id => "Bahasa Indonesia",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.native_name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|l| l.code() == s || l.native_name().to_lowercase() == s)
            .ok_or_else(|| format!("Unknown language '{}': expected en, id, es or fr", s))
    }
}

/// The user's display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient")]
    pub theme: Theme,

    #[serde(default, deserialize_with = "lenient")]
    pub language: Language,

    #[serde(default, deserialize_with = "lenient")]
    pub currency: Currency,
}

/// Deserialize a value, falling back to its default when it is unrecognised
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(parsed),
        Err(error) => {
            tracing::warn!(%value, %error, "unrecognised preference value, using default");
            Ok(T::default())
        }
    }
}

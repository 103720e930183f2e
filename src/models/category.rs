//! Category model
//!
//! Categories tag transactions for grouping and statistics. Each carries an
//! icon key from a fixed table and a hex display colour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::kind::TransactionKind;

/// Icon assigned to categories created without one
pub const DEFAULT_ICON: &str = "circle";

/// Colour assigned to categories created without one
pub const DEFAULT_COLOR: &str = "#ef4444";

/// Maximum category name length
pub const MAX_NAME_LEN: usize = 50;

/// Every icon key a category may reference
pub const ICONS: &[&str] = &[
    "circle",
    "restaurant",
    "utensils",
    "car",
    "bag",
    "shopping-bag",
    "receipt",
    "file-text",
    "film",
    "medical",
    "heart",
    "school",
    "book",
    "briefcase",
    "laptop",
    "trending-up",
    "home",
    "plane",
    "music",
    "gamepad-2",
    "coffee",
    "gift",
    "credit-card",
    "smartphone",
    "fuel",
    "bus",
    "train",
    "bike",
    "pizza",
    "wine",
    "dumbbell",
    "stethoscope",
    "graduation-cap",
    "building",
    "wrench",
    "palette",
    "camera",
    "headphones",
    "shirt",
    "scissors",
    "hammer",
    "lightbulb",
];

/// Check whether an icon key is in the icon table
pub fn is_known_icon(icon: &str) -> bool {
    ICONS.contains(&icon)
}

/// Check whether a string is a `#rgb` or `#rrggbb` colour
pub fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// A transaction category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Whether this category classifies income or expenses
    pub kind: TransactionKind,

    /// Icon key
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Hex display colour
    #[serde(default = "default_color")]
    pub color: String,

    /// When the category was created
    pub created_at: DateTime<Utc>,

    /// When the category was last modified
    pub updated_at: DateTime<Utc>,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Category {
    /// Create a new category with the default icon and colour
    pub fn new(name: impl Into<String>, kind: TransactionKind) -> Self {
        Self::with_style(name, kind, DEFAULT_ICON, DEFAULT_COLOR)
    }

    /// Create a new category with an explicit icon and colour
    pub fn with_style(
        name: impl Into<String>,
        kind: TransactionKind,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            icon: icon.into(),
            color: color.into().to_lowercase(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_known_icon(&self.icon) {
            return Err(CategoryValidationError::UnknownIcon(self.icon.clone()));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The categories every new installation starts with
pub fn default_categories() -> Vec<Category> {
    use TransactionKind::{Expense, Income};

    [
        ("Food", Expense, "restaurant", "#ef4444"),
        ("Transport", Expense, "car", "#3b82f6"),
        ("Shopping", Expense, "bag", "#8b5cf6"),
        ("Bills", Expense, "receipt", "#f59e0b"),
        ("Entertainment", Expense, "film", "#ec4899"),
        ("Health", Expense, "medical", "#10b981"),
        ("Education", Expense, "school", "#6366f1"),
        ("Salary", Income, "briefcase", "#22c55e"),
        ("Freelance", Income, "laptop", "#06b6d4"),
        ("Investment", Income, "trending-up", "#84cc16"),
    ]
    .into_iter()
    .map(|(name, kind, icon, color)| Category::with_style(name, kind, icon, color))
    .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    UnknownIcon(String),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::UnknownIcon(icon) => write!(f, "Unknown icon '{}'", icon),
            Self::InvalidColor(color) => {
                write!(f, "Invalid colour '{}': expected #rgb or #rrggbb", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

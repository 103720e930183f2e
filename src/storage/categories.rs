//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. A missing file
//! loads as the seeded default categories.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinotaError;
use crate::models::{default_categories, Category, CategoryId, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk, seeding the defaults when no file exists
    pub fn load(&self) -> Result<(), FinotaError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no category file, seeding defaults");
            return self.reset();
        }

        let file_data: CategoryData = read_json(&self.path)?;
        self.replace_all(file_data.categories)
    }

    /// Replace the in-memory contents with the default categories
    pub fn reset(&self) -> Result<(), FinotaError> {
        self.replace_all(default_categories())
    }

    fn replace_all(&self, list: Vec<Category>) -> Result<(), FinotaError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        for category in list {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), FinotaError> {
        let categories = self.get_all()?;
        write_json_atomic(&self.path, &CategoryData { categories })
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, FinotaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get all categories, income first, then by name
    pub fn get_all(&self) -> Result<Vec<Category>, FinotaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by_key(|c| (c.kind, c.name.to_lowercase()));
        Ok(list)
    }

    /// Get all categories of one kind
    pub fn get_by_kind(&self, kind: TransactionKind) -> Result<Vec<Category>, FinotaError> {
        let mut list = self.get_all()?;
        list.retain(|c| c.kind == kind);
        Ok(list)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, FinotaError> {
        let name = name.trim().to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .find(|c| c.name.to_lowercase() == name))
    }

    /// Get a category of one kind by name (case-insensitive)
    pub fn get_by_name_and_kind(
        &self,
        name: &str,
        kind: TransactionKind,
    ) -> Result<Option<Category>, FinotaError> {
        let name = name.trim().to_lowercase();
        Ok(self
            .get_by_kind(kind)?
            .into_iter()
            .find(|c| c.name.to_lowercase() == name))
    }

    /// Find categories whose ID matches a short ID or UUID prefix
    pub fn find_by_prefix(&self, identifier: &str) -> Result<Vec<Category>, FinotaError> {
        let mut list = self.get_all()?;
        list.retain(|c| c.id.matches_prefix(identifier));
        Ok(list)
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), FinotaError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    /// Delete a category, returning whether it existed
    pub fn delete(&self, id: CategoryId) -> Result<bool, FinotaError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, FinotaError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.len())
    }
}

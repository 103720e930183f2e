//! Category service
//!
//! Provides business logic for category management. Transactions refer to
//! categories by name, so renames and deletions are propagated here.

use crate::error::{FinotaError, FinotaResult};
use crate::models::category::{DEFAULT_COLOR, DEFAULT_ICON};
use crate::models::{Category, CategoryId, TransactionKind};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new category
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub kind: TransactionKind,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Changes to apply to a category; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub kind: Option<TransactionKind>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// What happens to transactions tagged with a category being deleted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Refuse to delete a category that is still in use
    #[default]
    Block,
    /// Delete anyway, leaving transactions tagged with the old name
    Orphan,
    /// Move the transactions to another existing category first
    Reassign(String),
}

/// Result of a category deletion
#[derive(Debug, Clone)]
pub struct DeletedCategory {
    pub category: Category,
    /// Transactions that referenced the category
    pub affected: usize,
    /// Name the transactions were moved to, if any
    pub reassigned_to: Option<String>,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(&self, input: CreateCategoryInput) -> FinotaResult<Category> {
        let name = input.name.trim();
        let category = Category::with_style(
            name,
            input.kind,
            input.icon.as_deref().map(str::trim).unwrap_or(DEFAULT_ICON),
            input.color.as_deref().map(str::trim).unwrap_or(DEFAULT_COLOR),
        );

        category
            .validate()
            .map_err(|e| FinotaError::Validation(e.to_string()))?;

        self.ensure_unique(name, input.kind, None)?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        tracing::debug!(id = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> FinotaResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Get a category by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> FinotaResult<Option<Category>> {
        self.storage.categories.get_by_name(name)
    }

    /// Find a category by name, full ID, short ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> FinotaResult<Option<Category>> {
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        if let Ok(id) = identifier.trim().parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        let mut matches = self.storage.categories.find_by_prefix(identifier)?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(FinotaError::Ambiguous {
                entity_type: "Category",
                identifier: identifier.to_string(),
                matches: n,
            }),
        }
    }

    /// List categories, optionally restricted to one kind
    pub fn list(&self, kind: Option<TransactionKind>) -> FinotaResult<Vec<Category>> {
        match kind {
            Some(kind) => self.storage.categories.get_by_kind(kind),
            None => self.storage.categories.get_all(),
        }
    }

    /// Update a category
    ///
    /// A rename is applied to every transaction of the category's previous
    /// kind tagged with the old name.
    pub fn update(&self, id: CategoryId, update: CategoryUpdate) -> FinotaResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FinotaError::category_not_found(id.to_string()))?;

        let old_name = category.name.clone();
        let old_kind = category.kind;

        if let Some(name) = update.name {
            category.name = name.trim().to_string();
        }
        if let Some(kind) = update.kind {
            category.kind = kind;
        }
        if let Some(icon) = update.icon {
            category.icon = icon.trim().to_string();
        }
        if let Some(color) = update.color {
            category.color = color.trim().to_lowercase();
        }
        category.updated_at = chrono::Utc::now();

        category
            .validate()
            .map_err(|e| FinotaError::Validation(e.to_string()))?;

        self.ensure_unique(&category.name, category.kind, Some(id))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        if category.name != old_name {
            let moved = self
                .storage
                .transactions
                .retag(&old_name, old_kind, &category.name)?;
            if moved > 0 {
                self.storage.transactions.save()?;
            }
            tracing::debug!(from = %old_name, to = %category.name, moved, "renamed category");
        }

        Ok(category)
    }

    /// Delete a category according to a policy
    pub fn delete(&self, id: CategoryId, policy: DeletePolicy) -> FinotaResult<DeletedCategory> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FinotaError::category_not_found(id.to_string()))?;

        let affected = self.usage_count(&category.name, category.kind)?;
        let mut reassigned_to = None;

        match policy {
            DeletePolicy::Block if affected > 0 => {
                return Err(FinotaError::InUse {
                    category: category.name,
                    count: affected,
                });
            }
            DeletePolicy::Block => {}
            DeletePolicy::Orphan => {
                if affected > 0 {
                    tracing::warn!(
                        category = %category.name,
                        affected,
                        "deleting category still used by transactions"
                    );
                }
            }
            DeletePolicy::Reassign(target) => {
                let target = match self
                    .storage
                    .categories
                    .get_by_name_and_kind(&target, category.kind)?
                {
                    Some(found) => found,
                    None => self
                        .storage
                        .categories
                        .get_by_name(&target)?
                        .ok_or_else(|| FinotaError::category_not_found(target.trim()))?,
                };

                if target.id == category.id {
                    return Err(FinotaError::Validation(
                        "Cannot reassign transactions to the category being deleted".into(),
                    ));
                }
                if target.kind != category.kind {
                    return Err(FinotaError::Validation(format!(
                        "Cannot move {} transactions to {} category '{}'",
                        category.kind.to_string().to_lowercase(),
                        target.kind.to_string().to_lowercase(),
                        target.name
                    )));
                }

                if affected > 0 {
                    self.storage
                        .transactions
                        .retag(&category.name, category.kind, &target.name)?;
                    self.storage.transactions.save()?;
                }
                reassigned_to = Some(target.name);
            }
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        tracing::debug!(name = %category.name, affected, "deleted category");
        Ok(DeletedCategory {
            category,
            affected,
            reassigned_to,
        })
    }

    /// Number of transactions of a kind tagged with a category name
    pub fn usage_count(&self, name: &str, kind: TransactionKind) -> FinotaResult<usize> {
        Ok(self.storage.transactions.get_by_category(name, kind)?.len())
    }

    /// Count all categories
    pub fn count(&self) -> FinotaResult<usize> {
        self.storage.categories.count()
    }

    /// Reject a name already used by another category of the same kind
    fn ensure_unique(
        &self,
        name: &str,
        kind: TransactionKind,
        except: Option<CategoryId>,
    ) -> FinotaResult<()> {
        let taken = self
            .storage
            .categories
            .get_by_kind(kind)?
            .into_iter()
            .any(|c| Some(c.id) != except && c.name.eq_ignore_ascii_case(name));

        if taken {
            return Err(FinotaError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }
        Ok(())
    }
}

//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::display::{format_category_details, format_category_list};
use crate::error::{FinotaError, FinotaResult};
use crate::models::TransactionKind;
use crate::services::{CategoryService, CategoryUpdate, CreateCategoryInput, DeletePolicy};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories with their usage
    List {
        /// Only income or only expense categories
        #[arg(short, long)]
        kind: Option<TransactionKind>,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: TransactionKind,
        /// Icon name (e.g., "restaurant", "car")
        #[arg(short, long)]
        icon: Option<String>,
        /// Color as #rrggbb
        #[arg(long)]
        color: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category; a rename also renames it on its transactions
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New type
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
        /// New color
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
        /// Delete even if transactions use it, leaving them tagged with the old name
        #[arg(short, long, conflicts_with = "reassign_to")]
        force: bool,
        /// Move its transactions to this category first
        #[arg(long, value_name = "CATEGORY")]
        reassign_to: Option<String>,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FinotaResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = service.list(kind)?;
            let rows = categories
                .into_iter()
                .map(|c| {
                    let used = service.usage_count(&c.name, c.kind)?;
                    Ok((c, used))
                })
                .collect::<FinotaResult<Vec<_>>>()?;

            print!("{}", format_category_list(&rows));
        }

        CategoryCommands::Create {
            name,
            kind,
            icon,
            color,
        } => {
            let category = service.create(CreateCategoryInput {
                name,
                kind,
                icon,
                color,
            })?;

            println!("Created category: {}", category.name);
            println!("  ID:    {}", category.id);
            println!("  Type:  {}", category.kind);
            println!("  Icon:  {}", category.icon);
            println!("  Color: {}", category.color);
        }

        CategoryCommands::Show { category } => {
            let found = service
                .find(&category)?
                .ok_or_else(|| FinotaError::category_not_found(&category))?;
            let used = service.usage_count(&found.name, found.kind)?;

            print!("{}", format_category_details(&found, used));
        }

        CategoryCommands::Edit {
            category,
            name,
            kind,
            icon,
            color,
        } => {
            let found = service
                .find(&category)?
                .ok_or_else(|| FinotaError::category_not_found(&category))?;

            if name.is_none() && kind.is_none() && icon.is_none() && color.is_none() {
                println!("No changes specified. Use --name, --kind, --icon or --color.");
                return Ok(());
            }

            let updated = service.update(
                found.id,
                CategoryUpdate {
                    name,
                    kind,
                    icon,
                    color,
                },
            )?;

            println!("Updated category: {}", updated.name);
            if updated.name != found.name {
                println!("  Renamed from '{}'", found.name);
            }
        }

        CategoryCommands::Delete {
            category,
            force,
            reassign_to,
        } => {
            let found = service
                .find(&category)?
                .ok_or_else(|| FinotaError::category_not_found(&category))?;

            let policy = match (reassign_to, force) {
                (Some(target), _) => DeletePolicy::Reassign(target),
                (None, true) => DeletePolicy::Orphan,
                (None, false) => DeletePolicy::Block,
            };

            let deleted = match service.delete(found.id, policy) {
                Err(FinotaError::InUse { category, count }) => {
                    println!(
                        "Category '{}' is used by {} transaction(s).",
                        category, count
                    );
                    println!("Use --reassign-to <CATEGORY> to move them, or --force to keep them tagged with the old name.");
                    return Err(FinotaError::InUse { category, count });
                }
                other => other?,
            };

            println!("Deleted category: {}", deleted.category.name);
            match deleted.reassigned_to {
                Some(target) if deleted.affected > 0 => {
                    println!("  Moved {} transaction(s) to '{}'", deleted.affected, target)
                }
                None if deleted.affected > 0 => println!(
                    "  {} transaction(s) still tagged '{}'",
                    deleted.affected, deleted.category.name
                ),
                _ => {}
            }
        }
    }

    Ok(())
}

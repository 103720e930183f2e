//! Transaction service
//!
//! Provides business logic for transaction management: CRUD operations,
//! filtering and search, and the per-date grouping used by the register view.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{FinotaError, FinotaResult};
use crate::models::{Money, Transaction, TransactionFields, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by income or expense
    pub kind: Option<TransactionKind>,
    /// Filter by category name (case-insensitive)
    pub category: Option<String>,
    /// Case-insensitive text to find in description or category
    pub search: Option<String>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category name
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check whether a transaction passes every criterion except the limit
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.kind.is_some_and(|kind| txn.kind != kind) {
            return false;
        }

        if let Some(category) = &self.category {
            if !txn.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty()
                && !txn.description.to_lowercase().contains(&needle)
                && !txn.category.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if self.start_date.is_some_and(|start| txn.date < start) {
            return false;
        }

        if self.end_date.is_some_and(|end| txn.date > end) {
            return false;
        }

        true
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

/// Transactions sharing one date, with that day's totals
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
    pub income: Money,
    pub expense: Money,
}

impl DateGroup {
    /// Income minus expense for the day
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> FinotaResult<Transaction> {
        let mut txn = Transaction::new(
            input.description.trim(),
            input.amount,
            input.category.trim(),
            input.kind,
            input.date,
        );
        if let Some(notes) = input.notes {
            txn = txn.with_notes(notes);
        }

        txn.validate()
            .map_err(|e| FinotaError::Validation(e.to_string()))?;

        txn.category = self.resolve_category_name(&txn.category, txn.kind)?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::debug!(id = %txn.id, amount = %txn.amount, "created transaction");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinotaResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full UUID, short ID (`txn-1a2b3c4d`) or unique
    /// UUID prefix
    pub fn find(&self, identifier: &str) -> FinotaResult<Option<Transaction>> {
        if let Ok(id) = identifier.trim().parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let mut matches = self.storage.transactions.find_by_prefix(identifier)?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(FinotaError::Ambiguous {
                entity_type: "Transaction",
                identifier: identifier.to_string(),
                matches: n,
            }),
        }
    }

    /// List transactions matching a filter, newest first
    pub fn list(&self, filter: TransactionFilter) -> FinotaResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        transactions.retain(|t| filter.matches(t));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// The `count` newest transactions
    pub fn recent(&self, count: usize) -> FinotaResult<Vec<Transaction>> {
        self.list(TransactionFilter::new().limit(count))
    }

    /// Replace every editable field of a transaction
    pub fn update(&self, id: TransactionId, fields: TransactionFields) -> FinotaResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinotaError::transaction_not_found(id.to_string()))?;

        txn.apply(TransactionFields {
            description: fields.description.trim().to_string(),
            category: fields.category.trim().to_string(),
            ..fields
        });

        txn.validate()
            .map_err(|e| FinotaError::Validation(e.to_string()))?;

        txn.category = self.resolve_category_name(&txn.category, txn.kind)?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::debug!(id = %txn.id, "updated transaction");
        Ok(txn)
    }

    /// Delete a transaction, returning whether anything was removed
    pub fn delete(&self, id: TransactionId) -> FinotaResult<bool> {
        let removed = self.storage.transactions.delete(id)?;
        if removed {
            self.storage.transactions.save()?;
            tracing::debug!(%id, "deleted transaction");
        }
        Ok(removed)
    }

    /// Group transactions by date, newest date first
    ///
    /// Transactions keep their relative order within each group.
    pub fn group_by_date(transactions: &[Transaction]) -> Vec<DateGroup> {
        let mut groups: Vec<DateGroup> = Vec::new();

        for txn in transactions {
            let index = match groups.iter().position(|g| g.date == txn.date) {
                Some(index) => index,
                None => {
                    groups.push(DateGroup {
                        date: txn.date,
                        transactions: Vec::new(),
                        income: Money::zero(),
                        expense: Money::zero(),
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[index];

            match txn.kind {
                TransactionKind::Income => group.income += txn.amount,
                TransactionKind::Expense => group.expense += txn.amount,
            }
            group.transactions.push(txn.clone());
        }

        groups.sort_by(|a, b| b.date.cmp(&a.date));
        groups
    }

    /// Distinct category names used by transactions, sorted
    pub fn category_names(&self) -> FinotaResult<Vec<String>> {
        let names: BTreeSet<String> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .map(|t| t.category)
            .collect();
        Ok(names.into_iter().collect())
    }

    /// Count all transactions
    pub fn count(&self) -> FinotaResult<usize> {
        self.storage.transactions.count()
    }

    /// Use the stored spelling of a known category, preferring one of the
    /// transaction's kind; unknown names are kept as typed
    fn resolve_category_name(&self, name: &str, kind: TransactionKind) -> FinotaResult<String> {
        if let Some(category) = self.storage.categories.get_by_name_and_kind(name, kind)? {
            return Ok(category.name);
        }

        match self.storage.categories.get_by_name(name)? {
            Some(category) => {
                tracing::warn!(
                    category = %category.name,
                    kind = %kind,
                    "transaction kind differs from its category"
                );
                Ok(category.name)
            }
            None => {
                tracing::warn!(
                    category = %name,
                    "transaction refers to a category that does not exist"
                );
                Ok(name.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinotaPaths;
    use crate::models::Category;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinotaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(
        description: &str,
        cents: i64,
        category: &str,
        kind: TransactionKind,
        date: (i32, u32, u32),
    ) -> CreateTransactionInput {
        CreateTransactionInput {
            description: description.into(),
            amount: Money::from_cents(cents),
            category: category.into(),
            kind,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            notes: None,
        }
    }

    fn seed(service: &TransactionService) {
        use TransactionKind::{Expense, Income};
        service.create(input("Salary", 500000, "Salary", Income, (2024, 1, 15))).unwrap();
        service.create(input("Groceries", 12000, "Food", Expense, (2024, 1, 14))).unwrap();
        service.create(input("Coffee", 450, "Food", Expense, (2024, 1, 14))).unwrap();
        service.create(input("Bus pass", 4500, "Transport", Expense, (2024, 2, 1))).unwrap();
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let before = service.count().unwrap();
        let mut new = input("Lunch", 1250, "Food", TransactionKind::Expense, (2024, 3, 1));
        new.notes = Some("  with team ".into());
        let txn = service.create(new).unwrap();

        assert_eq!(service.count().unwrap(), before + 1);
        let stored = service.get(txn.id).unwrap().unwrap();
        assert_eq!(stored, txn);
        assert_eq!(stored.notes.as_deref(), Some("with team"));
    }

    #[test]
    fn test_create_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .create(input("   ", 100, "Food", TransactionKind::Expense, (2024, 1, 1)))
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .create(input("Refund", -100, "Food", TransactionKind::Expense, (2024, 1, 1)))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_unknown_category_is_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input("Vet", 9000, "Pets", TransactionKind::Expense, (2024, 1, 1)))
            .unwrap();
        assert_eq!(txn.category, "Pets");
    }

    #[test]
    fn test_known_category_uses_stored_spelling() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input("Taxi", 1800, "transport", TransactionKind::Expense, (2024, 1, 1)))
            .unwrap();
        assert_eq!(txn.category, "Transport");
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        seed(&service);

        let all = service.list(TransactionFilter::new()).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].description, "Bus pass");

        let expenses = service
            .list(TransactionFilter::new().kind(TransactionKind::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 3);

        let food = service.list(TransactionFilter::new().category("food")).unwrap();
        assert_eq!(food.len(), 2);

        let search = service.list(TransactionFilter::new().search("COF")).unwrap();
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].description, "Coffee");

        let by_category_text = service.list(TransactionFilter::new().search("transp")).unwrap();
        assert_eq!(by_category_text.len(), 1);

        let january = service
            .list(TransactionFilter::new().date_range(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            ))
            .unwrap();
        assert_eq!(january.len(), 3);

        assert_eq!(service.recent(2).unwrap().len(), 2);
    }

    #[test]
    fn test_find_by_short_id_and_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        seed(&service);

        let txn = service.list(TransactionFilter::new()).unwrap().remove(0);
        let short = txn.id.to_string();
        let full = txn.id.as_uuid().to_string();

        assert_eq!(service.find(&short).unwrap().unwrap().id, txn.id);
        assert_eq!(service.find(&full).unwrap().unwrap().id, txn.id);
        assert_eq!(service.find(&full[..6]).unwrap().unwrap().id, txn.id);
        assert!(service.find("txn-zzzzzzzz").unwrap().is_none());
    }

    #[test]
    fn test_update_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut new = input("Coffe", 450, "Food", TransactionKind::Expense, (2024, 1, 14));
        new.notes = Some("typo".into());
        let txn = service.create(new).unwrap();

        let mut fields = txn.fields();
        fields.description = "Coffee".into();
        fields.amount = Money::from_cents(500);
        fields.notes = None;

        let updated = service.update(txn.id, fields).unwrap();
        assert_eq!(updated.description, "Coffee");
        assert_eq!(updated.amount.cents(), 500);
        assert!(updated.notes.is_none());
        assert_eq!(updated.created_at, txn.created_at);

        let mut bad = updated.fields();
        bad.category = " ".into();
        assert!(service.update(txn.id, bad).unwrap_err().is_validation());
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let ghost = Transaction::new(
            "Ghost",
            Money::from_cents(1),
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );

        let err = service.update(ghost.id, ghost.fields()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        seed(&service);

        let txn = service.recent(1).unwrap().remove(0);
        assert!(service.delete(txn.id).unwrap());
        assert_eq!(service.count().unwrap(), 3);
        assert!(service.get(txn.id).unwrap().is_none());

        // Deleting again is a no-op
        assert!(!service.delete(txn.id).unwrap());
        assert_eq!(service.count().unwrap(), 3);
    }

    #[test]
    fn test_group_by_date() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        seed(&service);

        let all = service.list(TransactionFilter::new()).unwrap();
        let groups = TransactionService::group_by_date(&all);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let jan14 = &groups[2];
        assert_eq!(jan14.transactions.len(), 2);
        assert_eq!(jan14.expense.cents(), 12450);
        assert_eq!(jan14.net().cents(), -12450);
    }

    #[test]
    fn test_category_names() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        seed(&service);

        assert_eq!(
            service.category_names().unwrap(),
            vec!["Food", "Salary", "Transport"]
        );
    }

    #[test]
    fn test_category_spelling_prefers_same_kind() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .categories
            .upsert(Category::new("FOOD", TransactionKind::Income))
            .unwrap();
        let service = TransactionService::new(&storage);

        let expense = service
            .create(input("Lunch", 1200, "food", TransactionKind::Expense, (2024, 1, 2)))
            .unwrap();
        let income = service
            .create(input("Stipend", 5000, "food", TransactionKind::Income, (2024, 1, 2)))
            .unwrap();

        assert_eq!(expense.category, "Food");
        assert_eq!(income.category, "FOOD");
    }
}

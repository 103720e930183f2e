//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::FinotaError;
use crate::models::{Transaction, TransactionId, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TransactionData {
    pub transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

/// Newest first: by date, then by creation time
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), FinotaError> {
        let file_data: TransactionData = read_json(&self.path)?;
        self.replace_all(file_data.transactions)
    }

    /// Replace the in-memory contents
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), FinotaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for txn in transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FinotaError> {
        let transactions = self.get_all()?;
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinotaError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinotaError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Get transactions of one kind tagged with a category name (exact match)
    ///
    /// Income and expense categories may share a name, so the kind is part
    /// of the match.
    pub fn get_by_category(
        &self,
        category: &str,
        kind: TransactionKind,
    ) -> Result<Vec<Transaction>, FinotaError> {
        let mut transactions = self.get_all()?;
        transactions.retain(|t| t.category == category && t.kind == kind);
        Ok(transactions)
    }

    /// Get transactions in an inclusive date range
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, FinotaError> {
        let mut transactions = self.get_all()?;
        transactions.retain(|t| t.date >= start && t.date <= end);
        Ok(transactions)
    }

    /// Find transactions whose ID matches a short ID or UUID prefix
    pub fn find_by_prefix(&self, identifier: &str) -> Result<Vec<Transaction>, FinotaError> {
        let mut transactions = self.get_all()?;
        transactions.retain(|t| t.id.matches_prefix(identifier));
        Ok(transactions)
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), FinotaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Rename the category tag on every transaction of `kind` tagged `from`,
    /// returning how many were changed
    pub fn retag(
        &self,
        from: &str,
        kind: TransactionKind,
        to: &str,
    ) -> Result<usize, FinotaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut changed = 0;
        for txn in data
            .values_mut()
            .filter(|t| t.category == from && t.kind == kind)
        {
            txn.category = to.to_string();
            txn.updated_at = chrono::Utc::now();
            changed += 1;
        }

        Ok(changed)
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, FinotaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FinotaError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinotaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

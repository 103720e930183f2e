//! Category breakdown
//!
//! Groups transactions by category name and ranks the categories by the
//! total amount moved through them.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{FinotaError, FinotaResult};
use crate::models::{Money, Transaction, TransactionKind};

/// Totals for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    /// Category name as tagged on the transactions
    pub category: String,
    pub income: Money,
    pub expense: Money,
    /// Sum of every member amount, regardless of kind
    pub total: Money,
    pub count: usize,
    /// Share of the overall total, in percent
    pub percentage: f64,
}

/// Per-category totals, largest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryBreakdown {
    pub rows: Vec<CategoryRow>,
    /// Sum of every row's total
    pub total: Money,
}

impl CategoryBreakdown {
    /// Group transactions by category
    ///
    /// Rows are sorted by descending total, ties broken by name.
    pub fn compute<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut by_name: HashMap<&str, CategoryRow> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions {
            let row = by_name
                .entry(txn.category.as_str())
                .or_insert_with(|| CategoryRow {
                    category: txn.category.clone(),
                    income: Money::zero(),
                    expense: Money::zero(),
                    total: Money::zero(),
                    count: 0,
                    percentage: 0.0,
                });

            match txn.kind {
                TransactionKind::Income => row.income += txn.amount,
                TransactionKind::Expense => row.expense += txn.amount,
            }
            row.total += txn.amount;
            row.count += 1;
            total += txn.amount;
        }

        let mut rows: Vec<_> = by_name.into_values().collect();
        for row in &mut rows {
            row.percentage = if total.is_zero() {
                0.0
            } else {
                row.total.as_f64() / total.as_f64() * 100.0
            };
        }
        rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Self { rows, total }
    }

    /// Keep only the first `n` rows
    pub fn top(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    /// Look up a row by category name
    pub fn get(&self, category: &str) -> Option<&CategoryRow> {
        self.rows.iter().find(|r| r.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the breakdown as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FinotaResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["category", "income", "expense", "total", "count", "percentage"])
            .map_err(|e| FinotaError::Export(e.to_string()))?;

        for row in &self.rows {
            csv.write_record([
                row.category.clone(),
                row.income.to_string(),
                row.expense.to_string(),
                row.total.to_string(),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])
            .map_err(|e| FinotaError::Export(e.to_string()))?;
        }

        csv.flush()
            .map_err(|e| FinotaError::Export(e.to_string()))?;
        Ok(())
    }
}

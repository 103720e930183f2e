//! CSV export of transactions

use std::io::Write;

use crate::error::{FinotaError, FinotaResult};
use crate::models::Transaction;
use crate::storage::Storage;

const HEADER: [&str; 7] = [
    "id",
    "date",
    "description",
    "category",
    "kind",
    "amount",
    "notes",
];

/// Export every stored transaction, newest first
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> FinotaResult<usize> {
    let transactions = storage.transactions.get_all()?;
    write_transactions_csv(&transactions, writer)?;
    Ok(transactions.len())
}

/// Write the given transactions as CSV with a header row
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinotaResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)
        .map_err(|e| FinotaError::Export(e.to_string()))?;

    for txn in transactions {
        csv.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.description.clone(),
            txn.category.clone(),
            txn.kind.as_str().to_string(),
            txn.amount.to_string(),
            txn.notes.clone().unwrap_or_default(),
        ])
        .map_err(|e| FinotaError::Export(e.to_string()))?;
    }

    csv.flush()
        .map_err(|e| FinotaError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinotaPaths;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_header_and_rows() {
        let coffee = Transaction::new(
            "Coffee, large",
            Money::from_cents(450),
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
        )
        .with_notes("oat milk");

        let mut buffer = Vec::new();
        write_transactions_csv(&[coffee.clone()], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "id,date,description,category,kind,amount,notes");
        assert_eq!(
            lines[1],
            format!(
                "{},2024-01-14,\"Coffee, large\",Food,expense,4.50,oat milk",
                coffee.id.as_uuid()
            )
        );
    }

    #[test]
    fn test_export_from_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(FinotaPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage
            .transactions
            .upsert(Transaction::new(
                "Salary",
                Money::from_units(5000, 0),
                "Salary",
                TransactionKind::Income,
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            ))
            .unwrap();

        let mut buffer = Vec::new();
        let count = export_transactions_csv(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(count, 1);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains(",income,5000.00,"));
    }
}

//! Transaction display formatting
//!
//! Provides the transaction table, the date-grouped register view and the
//! detail view.

use tabled::Tabled;

use crate::models::{Currency, Transaction, TransactionKind};
use crate::services::DateGroup;

use super::{table, truncate};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Signed, currency-formatted amount: `+$5,000.00` or `-$4.50`
pub fn format_signed(txn: &Transaction, currency: Currency) -> String {
    match txn.kind {
        TransactionKind::Income => format!("+{}", currency.format(txn.amount)),
        TransactionKind::Expense => currency.format(-txn.amount),
    }
}

fn row(txn: &Transaction, currency: Currency, date_format: &str) -> TransactionRow {
    TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.format(date_format).to_string(),
        description: truncate(&txn.description, 32),
        category: truncate(&txn.category, 20),
        amount: format_signed(txn, currency),
    }
}

/// Format transactions as a table
pub fn format_transaction_list(
    transactions: &[Transaction],
    currency: Currency,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions
        .iter()
        .map(|t| row(t, currency, date_format))
        .collect();
    format!("{}\n{} transaction(s)\n", table(rows), transactions.len())
}

/// Format date groups as a register: one heading per day with its net
pub fn format_transaction_register(
    groups: &[DateGroup],
    currency: Currency,
    date_format: &str,
) -> String {
    if groups.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for group in groups {
        output.push_str(&format!(
            "{}  (net {})\n",
            group.date.format(date_format),
            currency.format(group.net())
        ));
        for txn in &group.transactions {
            output.push_str(&format!(
                "  {:<12} {:<32} {:<20} {:>14}\n",
                txn.id.to_string(),
                truncate(&txn.description, 32),
                truncate(&txn.category, 20),
                format_signed(txn, currency)
            ));
        }
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    currency: Currency,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", currency.format(txn.amount)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if let Some(notes) = &txn.notes {
        output.push_str(&format!("Notes:       {}\n", notes));
    }

    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M")
    ));
    if txn.updated_at != txn.created_at {
        output.push_str(&format!(
            "Updated:     {}\n",
            txn.updated_at.format("%Y-%m-%d %H:%M")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::TransactionService;
    use chrono::NaiveDate;

    fn coffee() -> Transaction {
        Transaction::new(
            "Coffee",
            Money::from_cents(450),
            "Food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
        )
        .with_notes("oat milk")
    }

    fn salary() -> Transaction {
        Transaction::new(
            "Salary",
            Money::from_units(5000, 0),
            "Salary",
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_signed_amounts() {
        assert_eq!(format_signed(&coffee(), Currency::Usd), "-$4.50");
        assert_eq!(format_signed(&salary(), Currency::Usd), "+$5,000.00");
        assert_eq!(format_signed(&salary(), Currency::Idr), "+Rp5,000");
    }

    #[test]
    fn test_list_contains_rows() {
        let output = format_transaction_list(&[salary(), coffee()], Currency::Eur, "%Y-%m-%d");
        assert!(output.contains("Description"));
        assert!(output.contains("2024-01-14"));
        assert!(output.contains("-€4.50"));
        assert!(output.contains("2 transaction(s)"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_transaction_list(&[], Currency::Usd, "%Y-%m-%d"),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_register_groups_by_day() {
        let groups = TransactionService::group_by_date(&[salary(), coffee()]);
        let output = format_transaction_register(&groups, Currency::Usd, "%d/%m/%Y");
        assert!(output.contains("15/01/2024  (net $5,000.00)"));
        assert!(output.contains("14/01/2024  (net -$4.50)"));
    }

    #[test]
    fn test_details() {
        let output = format_transaction_details(&coffee(), Currency::Usd, "%Y-%m-%d");
        assert!(output.contains("Description: Coffee"));
        assert!(output.contains("Amount:      $4.50"));
        assert!(output.contains("Notes:       oat milk"));
        assert!(output.contains("Type:        Expense"));
    }
}

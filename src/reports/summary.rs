//! Income / expense summaries
//!
//! Totals over a set of transactions, overall and per calendar month.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, Transaction, TransactionKind};

/// Totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    pub income_count: usize,
    pub expense_count: usize,
}

impl Summary {
    /// Sum income and expenses
    pub fn compute<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut summary = Self::default();
        for txn in transactions {
            summary.add(txn);
        }
        summary
    }

    fn add(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => {
                self.income += txn.amount;
                self.income_count += 1;
            }
            TransactionKind::Expense => {
                self.expense += txn.amount;
                self.expense_count += 1;
            }
        }
    }

    /// Total income minus total expense
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }

    /// Number of transactions summarised
    pub fn count(&self) -> usize {
        self.income_count + self.expense_count
    }

    /// Share of income kept, in percent; 0 when there is no income
    pub fn savings_rate(&self) -> f64 {
        if !self.income.is_positive() {
            return 0.0;
        }
        self.balance().as_f64() / self.income.as_f64() * 100.0
    }
}

/// Totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub summary: Summary,
}

impl MonthlyTotals {
    /// First day of the month
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// `YYYY-MM` label
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn net(&self) -> Money {
        self.summary.balance()
    }
}

/// One entry per month that has transactions, oldest first
pub fn monthly_totals<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<(i32, u32), Summary> = BTreeMap::new();
    for txn in transactions {
        months
            .entry((txn.date.year(), txn.date.month()))
            .or_default()
            .add(txn);
    }

    months
        .into_iter()
        .map(|((year, month), summary)| MonthlyTotals {
            year,
            month,
            summary,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(description: &str, cents: i64, kind: TransactionKind, date: (i32, u32, u32)) -> Transaction {
        Transaction::new(
            description,
            Money::from_cents(cents),
            "Misc",
            kind,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn fixture() -> Vec<Transaction> {
        use TransactionKind::{Expense, Income};
        vec![
            txn("Salary", 500000, Income, (2024, 1, 15)),
            txn("Freelance", 80000, Income, (2024, 1, 20)),
            txn("Groceries", 12000, Expense, (2024, 1, 14)),
            txn("Coffee", 450, Expense, (2024, 1, 14)),
            txn("Fuel", 4500, Expense, (2024, 2, 2)),
            txn("Cinema", 2500, Expense, (2024, 2, 3)),
        ]
    }

    #[test]
    fn test_balance_fixture() {
        let summary = Summary::compute(&fixture());

        assert_eq!(summary.income, Money::from_units(5800, 0));
        assert_eq!(summary.expense, Money::from_units(194, 50));
        assert_eq!(summary.balance(), Money::from_units(5605, 50));
        assert_eq!(summary.count(), 6);
        assert_eq!(summary.income_count, 2);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        use TransactionKind::{Expense, Income};
        let big = i64::MAX / 2 + 1;
        let transactions = vec![
            txn("Windfall", big, Income, (2024, 1, 1)),
            txn("Windfall", big, Income, (2024, 1, 2)),
            txn("Yacht", big, Expense, (2024, 1, 3)),
        ];

        let summary = Summary::compute(&transactions);
        assert_eq!(summary.income, Money::from_cents(i64::MAX));
        assert_eq!(summary.balance(), Money::from_cents(i64::MAX - big));
        assert_eq!(monthly_totals(&transactions)[0].summary.income, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_savings_rate() {
        let summary = Summary::compute(&fixture());
        let rate = summary.savings_rate();
        assert!((rate - 96.6465).abs() < 0.001, "rate was {}", rate);

        let expenses_only = Summary::compute(&fixture()[2..]);
        assert_eq!(expenses_only.savings_rate(), 0.0);
        assert_eq!(Summary::default().savings_rate(), 0.0);
    }

    #[test]
    fn test_monthly_totals() {
        let months = monthly_totals(&fixture());

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label(), "2024-01");
        assert_eq!(months[0].summary.income.cents(), 580000);
        assert_eq!(months[0].summary.expense.cents(), 12450);
        assert_eq!(months[1].label(), "2024-02");
        assert_eq!(months[1].net().cents(), -7000);
        assert_eq!(months[1].start(), NaiveDate::from_ymd_opt(2024, 2, 1));
    }
}

//! Period statistics and the dashboard
//!
//! `PeriodReport` is the statistics view for one time range; `Dashboard`
//! is the overview shown on start-up.

use chrono::{NaiveDate, Weekday};

use crate::models::{Money, Transaction};

use super::breakdown::CategoryBreakdown;
use super::range::TimeRange;
use super::summary::Summary;

/// Statistics for one time range
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodReport {
    pub range: TimeRange,
    /// Inclusive bounds; `None` when the range is `All` and there is no data
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub summary: Summary,
    /// Top categories of the period
    pub categories: CategoryBreakdown,
    /// Number of days the period spans
    pub days: i64,
    /// Total expense divided by `days`
    pub daily_average: Money,
}

impl PeriodReport {
    /// Build the report for `range`, resolved against `today`
    ///
    /// `top` limits the number of categories kept.
    pub fn generate(
        transactions: &[Transaction],
        range: TimeRange,
        today: NaiveDate,
        week_start: Weekday,
        top: usize,
    ) -> Self {
        let in_range = range.filter(transactions, today, week_start);

        let bounds = range.bounds(today, week_start).or_else(|| data_span(&in_range));
        let days = bounds
            .map(|(start, end)| (end - start).num_days() + 1)
            .unwrap_or(0);

        let summary = Summary::compute(&in_range);
        let daily_average = average_per_day(summary.expense, days);

        Self {
            range,
            bounds,
            summary,
            categories: CategoryBreakdown::compute(&in_range).top(top),
            days,
            daily_average,
        }
    }
}

/// Earliest and latest transaction dates
fn data_span(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let start = transactions.iter().map(|t| t.date).min()?;
    let end = transactions.iter().map(|t| t.date).max()?;
    Some((start, end))
}

/// Integer division of an amount over days, rounded half up
fn average_per_day(total: Money, days: i64) -> Money {
    if days <= 0 {
        return Money::zero();
    }
    Money::from_cents(total.cents().saturating_add(days / 2) / days)
}

/// Overview of all data plus the current month
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Totals over every transaction
    pub overall: Summary,
    /// Totals for the month containing `today`
    pub this_month: Summary,
    /// The newest transactions
    pub recent: Vec<Transaction>,
    pub total_transactions: usize,
}

impl Dashboard {
    /// Build the dashboard
    ///
    /// `transactions` is expected newest first, as the repository returns
    /// them.
    pub fn generate(transactions: &[Transaction], today: NaiveDate, recent_count: usize) -> Self {
        let month = TimeRange::ThisMonth;
        let this_month = Summary::compute(
            transactions
                .iter()
                .filter(|t| month.contains(t.date, today, Weekday::Sun)),
        );

        Self {
            overall: Summary::compute(transactions),
            this_month,
            recent: transactions.iter().take(recent_count).cloned().collect(),
            total_transactions: transactions.len(),
        }
    }

    /// Balance over all time
    pub fn balance(&self) -> Money {
        self.overall.balance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn txn(
        description: &str,
        cents: i64,
        category: &str,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Transaction {
        Transaction::new(description, Money::from_cents(cents), category, kind, date)
    }

    /// Newest first
    fn fixture() -> Vec<Transaction> {
        use TransactionKind::{Expense, Income};
        vec![
            txn("Cinema", 2500, "Entertainment", Expense, d(2024, 2, 3)),
            txn("Fuel", 4500, "Transport", Expense, d(2024, 2, 2)),
            txn("Freelance", 80000, "Freelance", Income, d(2024, 1, 20)),
            txn("Salary", 500000, "Salary", Income, d(2024, 1, 15)),
            txn("Groceries", 12000, "Food", Expense, d(2024, 1, 14)),
            txn("Coffee", 450, "Food", Expense, d(2024, 1, 14)),
        ]
    }

    #[test]
    fn test_month_report() {
        let report = PeriodReport::generate(
            &fixture(),
            TimeRange::ThisMonth,
            d(2024, 2, 10),
            Weekday::Sun,
            5,
        );

        assert_eq!(report.bounds, Some((d(2024, 2, 1), d(2024, 2, 29))));
        assert_eq!(report.days, 29);
        assert_eq!(report.summary.expense.cents(), 7000);
        assert_eq!(report.summary.count(), 2);
        // 7000 / 29 = 241.4
        assert_eq!(report.daily_average.cents(), 241);
        assert_eq!(report.categories.rows[0].category, "Transport");
    }

    #[test]
    fn test_week_report() {
        let report = PeriodReport::generate(
            &fixture(),
            TimeRange::ThisWeek,
            d(2024, 1, 17),
            Weekday::Sun,
            5,
        );

        assert_eq!(report.days, 7);
        assert_eq!(report.summary.income.cents(), 580000);
        assert_eq!(report.summary.count(), 4);
        assert_eq!(report.summary.expense.cents(), 12450);
        // Coffee and Groceries on the 14th fall in the week starting that Sunday
        assert_eq!(report.daily_average.cents(), 1779);
    }

    #[test]
    fn test_all_time_uses_data_span() {
        let report =
            PeriodReport::generate(&fixture(), TimeRange::All, d(2030, 1, 1), Weekday::Sun, 3);

        assert_eq!(report.bounds, Some((d(2024, 1, 14), d(2024, 2, 3))));
        assert_eq!(report.days, 21);
        assert_eq!(report.summary.balance(), Money::from_units(5605, 50));
        assert_eq!(report.categories.rows.len(), 3);
    }

    #[test]
    fn test_average_per_day_at_the_limit() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(average_per_day(max, 1), max);
        assert_eq!(average_per_day(Money::from_cents(1000), 3), Money::from_cents(333));
        assert_eq!(average_per_day(max, 0), Money::zero());
    }

    #[test]
    fn test_empty_report() {
        let report = PeriodReport::generate(&[], TimeRange::All, d(2024, 1, 1), Weekday::Sun, 5);
        assert_eq!(report.bounds, None);
        assert_eq!(report.days, 0);
        assert!(report.daily_average.is_zero());
        assert!(report.categories.is_empty());
    }

    #[test]
    fn test_dashboard() {
        let dashboard = Dashboard::generate(&fixture(), d(2024, 1, 31), 5);

        assert_eq!(dashboard.balance(), Money::from_units(5605, 50));
        assert_eq!(dashboard.total_transactions, 6);
        assert_eq!(dashboard.recent.len(), 5);
        assert_eq!(dashboard.recent[0].description, "Cinema");
        assert_eq!(dashboard.this_month.count(), 4);
        assert_eq!(dashboard.this_month.income.cents(), 580000);
    }
}

//! Reporting time ranges
//!
//! Ranges are resolved against a reference date so reports are
//! reproducible in tests.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::models::Transaction;

/// The period a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// Every transaction
    All,
    /// The calendar week containing the reference date
    ThisWeek,
    /// The calendar month containing the reference date
    #[default]
    ThisMonth,
    /// The three months up to and including the reference date
    Last3Months,
    /// The calendar year containing the reference date
    ThisYear,
    /// An explicit inclusive date range
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TimeRange {
    /// Inclusive bounds of the range, or `None` for `All`
    pub fn bounds(&self, today: NaiveDate, week_start: Weekday) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            Self::All => None,
            Self::ThisWeek => {
                let offset = days_since(today.weekday(), week_start);
                let start = today - chrono::Duration::days(offset);
                Some((start, start + chrono::Duration::days(6)))
            }
            Self::ThisMonth => Some((first_of_month(today), last_of_month(today))),
            Self::Last3Months => {
                let start = today
                    .checked_sub_months(Months::new(3))
                    .unwrap_or(NaiveDate::MIN);
                Some((start, today))
            }
            Self::ThisYear => {
                let start = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
                let end = NaiveDate::from_ymd_opt(today.year(), 12, 31)?;
                Some((start, end))
            }
            Self::Custom { start, end } => Some((start.min(end), start.max(end))),
        }
    }

    /// Check whether a date falls inside the range
    pub fn contains(&self, date: NaiveDate, today: NaiveDate, week_start: Weekday) -> bool {
        match self.bounds(today, week_start) {
            Some((start, end)) => date >= start && date <= end,
            None => true,
        }
    }

    /// The transactions inside the range, in their original order
    pub fn filter(
        &self,
        transactions: &[Transaction],
        today: NaiveDate,
        week_start: Weekday,
    ) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(t.date, today, week_start))
            .cloned()
            .collect()
    }

    /// Short human-readable label
    pub fn label(&self) -> String {
        match self {
            Self::All => "All time".into(),
            Self::ThisWeek => "This week".into(),
            Self::ThisMonth => "This month".into(),
            Self::Last3Months => "Last 3 months".into(),
            Self::ThisYear => "This year".into(),
            Self::Custom { start, end } => format!("{} to {}", start, end),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "all" | "all-time" => Ok(Self::All),
            "week" | "this-week" => Ok(Self::ThisWeek),
            "month" | "this-month" => Ok(Self::ThisMonth),
            "3months" | "3-months" | "last-3-months" | "quarter" => Ok(Self::Last3Months),
            "year" | "this-year" => Ok(Self::ThisYear),
            other => Err(format!(
                "Unknown range '{}': expected all, week, month, 3months or year",
                other
            )),
        }
    }
}

/// Days from `start` forward to `day` (0-6)
fn days_since(day: Weekday, start: Weekday) -> i64 {
    let day = day.num_days_from_sunday() as i64;
    let start = start.num_days_from_sunday() as i64;
    (day - start).rem_euclid(7)
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(crate) fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

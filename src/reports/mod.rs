//! Reports module for Finota
//!
//! Pure aggregation over transactions: summaries, monthly totals,
//! category breakdowns, period statistics and the dashboard.

pub mod breakdown;
pub mod period;
pub mod range;
pub mod summary;

pub use breakdown::{CategoryBreakdown, CategoryRow};
pub use period::{Dashboard, PeriodReport};
pub use range::TimeRange;
pub use summary::{monthly_totals, MonthlyTotals, Summary};

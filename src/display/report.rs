//! Report formatting utilities for terminal output
//!
//! Renders the dashboard, period statistics, category breakdowns and
//! monthly totals.

use tabled::Tabled;

use crate::models::Currency;
use crate::reports::{CategoryBreakdown, Dashboard, MonthlyTotals, PeriodReport, Summary};

use super::transaction::format_signed;
use super::{table, truncate};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn format_summary(summary: &Summary, currency: Currency) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  Income:       {:>16}\n",
        currency.format(summary.income)
    ));
    output.push_str(&format!(
        "  Expenses:     {:>16}\n",
        currency.format(summary.expense)
    ));
    output.push_str(&format!(
        "  Net:          {:>16}\n",
        currency.format(summary.balance())
    ));
    output.push_str(&format!(
        "  Savings rate: {:>16}\n",
        format!("{:.1}%", summary.savings_rate())
    ));
    output
}

/// Format the dashboard
pub fn format_dashboard(dashboard: &Dashboard, currency: Currency, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Balance: {}\n",
        currency.format(dashboard.balance())
    ));
    output.push_str(&separator(40));
    output.push('\n');

    output.push_str(&format!(
        "This month ({} transaction(s))\n",
        dashboard.this_month.count()
    ));
    output.push_str(&format_summary(&dashboard.this_month, currency));
    output.push('\n');

    output.push_str(&format!(
        "All time ({} transaction(s))\n",
        dashboard.total_transactions
    ));
    output.push_str(&format!(
        "  Income:       {:>16}\n",
        currency.format(dashboard.overall.income)
    ));
    output.push_str(&format!(
        "  Expenses:     {:>16}\n",
        currency.format(dashboard.overall.expense)
    ));
    output.push('\n');

    output.push_str("Recent transactions\n");
    if dashboard.recent.is_empty() {
        output.push_str("  No transactions yet. Add one with 'finota transaction add'.\n");
    } else {
        for txn in &dashboard.recent {
            output.push_str(&format!(
                "  {}  {:<28} {:<16} {:>14}\n",
                txn.date.format(date_format),
                truncate(&txn.description, 28),
                truncate(&txn.category, 16),
                format_signed(txn, currency)
            ));
        }
    }

    output
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format a category breakdown as a table
pub fn format_breakdown(breakdown: &CategoryBreakdown, currency: Currency) -> String {
    if breakdown.is_empty() {
        return "No transactions in this period.\n".to_string();
    }

    let max = breakdown
        .rows
        .iter()
        .map(|r| r.percentage)
        .fold(0.0_f64, f64::max);

    let rows = breakdown
        .rows
        .iter()
        .map(|r| BreakdownRow {
            category: r.category.clone(),
            income: currency.format(r.income),
            expense: currency.format(r.expense),
            total: currency.format(r.total),
            count: r.count,
            share: format_percentage(r.percentage),
            bar: format_bar(r.percentage, max, 12),
        })
        .collect();

    format!("{}\n", table(rows))
}

/// Format the statistics for one period
pub fn format_period_report(report: &PeriodReport, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Statistics: {}", report.range.label()));
    if let Some((start, end)) = report.bounds {
        output.push_str(&format!(" ({} to {})", start, end));
    }
    output.push('\n');
    output.push_str(&separator(40));
    output.push('\n');

    output.push_str(&format_summary(&report.summary, currency));
    output.push_str(&format!(
        "  Daily avg:    {:>16}  over {} day(s)\n",
        currency.format(report.daily_average),
        report.days
    ));
    output.push_str(&format!(
        "  Transactions: {:>16}\n\n",
        report.summary.count()
    ));

    output.push_str("Top categories\n");
    output.push_str(&format_breakdown(&report.categories, currency));

    output
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Count")]
    count: usize,
}

/// Format monthly totals as a table
pub fn format_monthly_totals(months: &[MonthlyTotals], currency: Currency) -> String {
    if months.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = months
        .iter()
        .map(|m| MonthRow {
            month: m.label(),
            income: currency.format(m.summary.income),
            expense: currency.format(m.summary.expense),
            net: currency.format(m.net()),
            count: m.summary.count(),
        })
        .collect();

    format!("{}\n", table(rows))
}

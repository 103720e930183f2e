//! CLI commands for reports
//!
//! Provides the dashboard, period statistics, category breakdowns and
//! monthly totals.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::display::{
    format_breakdown, format_dashboard, format_monthly_totals, format_period_report,
};
use crate::error::{FinotaError, FinotaResult};
use crate::models::{Transaction, TransactionKind};
use crate::reports::{monthly_totals, CategoryBreakdown, Dashboard, PeriodReport, TimeRange};
use crate::services::PreferenceService;
use crate::storage::Storage;

use super::{parse_date, parse_optional_date, today};

/// Time range selection shared by the report commands
#[derive(Args, Debug, Clone)]
pub struct RangeArgs {
    /// all, week, month, 3months or year
    #[arg(short, long, default_value = "month")]
    range: TimeRange,

    /// Custom range start (YYYY-MM-DD); overrides --range
    #[arg(long)]
    from: Option<String>,

    /// Custom range end (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "from")]
    to: Option<String>,
}

impl RangeArgs {
    fn resolve(&self) -> FinotaResult<TimeRange> {
        match &self.from {
            Some(from) => {
                let start = parse_date(from)?;
                let end = parse_optional_date(self.to.as_deref())?.unwrap_or_else(today);
                Ok(TimeRange::Custom { start, end })
            }
            None => Ok(self.range),
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Balance, this month's totals and recent transactions
    Dashboard,

    /// Income, expenses, savings rate and daily average for a period
    #[command(alias = "stats")]
    Summary {
        #[command(flatten)]
        range: RangeArgs,
    },

    /// Totals per category for a period
    Categories {
        #[command(flatten)]
        range: RangeArgs,

        /// Only income or only expenses
        #[arg(short, long)]
        kind: Option<TransactionKind>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income and expenses per calendar month
    Monthly {
        #[command(flatten)]
        range: RangeArgs,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinotaResult<()> {
    let transactions = storage.transactions.get_all()?;
    let currency = PreferenceService::new(storage).formatter()?;
    let today = today();
    let week_start = settings.week_start();

    match cmd {
        ReportCommands::Dashboard => {
            let dashboard = Dashboard::generate(&transactions, today, settings.recent_count);
            print!(
                "{}",
                format_dashboard(&dashboard, currency, &settings.date_format)
            );
        }

        ReportCommands::Summary { range } => {
            let report = PeriodReport::generate(
                &transactions,
                range.resolve()?,
                today,
                week_start,
                settings.top_categories,
            );
            print!("{}", format_period_report(&report, currency));
        }

        ReportCommands::Categories {
            range,
            kind,
            top,
            output,
        } => {
            let range = range.resolve()?;
            let in_range: Vec<Transaction> = range
                .filter(&transactions, today, week_start)
                .into_iter()
                .filter(|t| kind.map_or(true, |k| t.kind == k))
                .collect();

            let mut breakdown = CategoryBreakdown::compute(&in_range);
            if let Some(n) = top {
                breakdown = breakdown.top(n);
            }

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    FinotaError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                breakdown.export_csv(BufWriter::new(file))?;
                println!("Category report exported to: {}", path.display());
            } else {
                println!("Categories: {}", range.label());
                print!("{}", format_breakdown(&breakdown, currency));
            }
        }

        ReportCommands::Monthly { range } => {
            let range = range.resolve()?;
            let in_range = range.filter(&transactions, today, week_start);
            print!(
                "{}",
                format_monthly_totals(&monthly_totals(&in_range), currency)
            );
        }
    }

    Ok(())
}

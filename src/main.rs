use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use finota::cli::{
    handle_category_command, handle_config_command, handle_export_command, handle_init_command,
    handle_preference_command, handle_reminder_command, handle_report_command,
    handle_transaction_command,
};
use finota::config::paths::{FinotaPaths, DATA_DIR_ENV};
use finota::config::settings::Settings;
use finota::storage::init::needs_initialization;
use finota::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finota",
    version,
    about = "Personal finance tracker for income, expenses and reminders",
    long_about = "Finota records income and expenses, groups them into categories, \
                  reports on where the money went and keeps simple financial reminders. \
                  All data is stored locally as JSON."
)]
struct Cli {
    /// Directory holding config and data files
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init {
        /// Also add sample transactions and reminders
        #[arg(long)]
        sample_data: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(finota::cli::TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(finota::cli::CategoryCommands),

    /// Reminder management commands
    #[command(subcommand)]
    Reminder(finota::cli::ReminderCommands),

    /// Theme, language and currency
    #[command(subcommand, alias = "pref")]
    Preference(finota::cli::PreferenceCommands),

    /// Reports and statistics
    #[command(subcommand)]
    Report(finota::cli::ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(finota::cli::ExportCommands),
}

fn main() {
    if let Err(error) = run() {
        eprintln!("finota error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let paths = match cli.data_dir.clone() {
        Some(dir) => FinotaPaths::with_base_dir(dir),
        None => FinotaPaths::new()?,
    };

    if let Some(Commands::Init { sample_data }) = cli.command {
        handle_init_command(&paths, sample_data)?;
        return Ok(());
    }

    let settings = Settings::load_or_create(&paths).context("failed to load settings")?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all().context("failed to load data")?;

    match cli.command {
        Some(Commands::Init { .. }) => {}
        Some(Commands::Config) => handle_config_command(&storage, &settings)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Reminder(cmd)) => handle_reminder_command(&storage, cmd)?,
        Some(Commands::Preference(cmd)) => handle_preference_command(&storage, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        None => {
            println!("Finota - personal finance tracker");
            println!();
            if needs_initialization(&paths) {
                println!("Run 'finota init' to get started.");
            }
            println!("Run 'finota --help' for usage information.");
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FINOTA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

//! `init` and `config` commands

use crate::config::paths::FinotaPaths;
use crate::config::settings::Settings;
use crate::error::FinotaResult;
use crate::storage::{initialize_storage, InitReport, Storage};

/// Create the data directory, settings, default categories and, on
/// request, sample data
pub fn handle_init_command(paths: &FinotaPaths, sample_data: bool) -> FinotaResult<()> {
    println!("Initializing Finota at: {}", paths.base_dir().display());

    let report = initialize_storage(paths, sample_data)?;

    if report.created_settings {
        println!("  Created settings:    {}", paths.settings_file().display());
    }
    if report.created_categories {
        println!("  Created default categories");
    }
    if report.created_preferences {
        println!("  Created preferences (Light, English, USD)");
    }
    if report.sample_transactions > 0 {
        println!(
            "  Added {} sample transaction(s)",
            report.sample_transactions
        );
    }
    if report.sample_reminders > 0 {
        println!("  Added {} sample reminder(s)", report.sample_reminders);
    }
    if report == InitReport::default() {
        println!("Already initialized; nothing was changed.");
        return Ok(());
    }

    println!();
    println!("Initialization complete!");
    println!("Run 'finota category list' to see your categories.");
    Ok(())
}

/// Show paths, settings and how much data is stored
pub fn handle_config_command(storage: &Storage, settings: &Settings) -> FinotaResult<()> {
    let paths = storage.paths();

    println!("Finota Configuration");
    println!("====================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!(
        "Initialized:    {}",
        if storage.is_initialized() { "yes" } else { "no (run 'finota init')" }
    );
    println!();
    println!("Settings:");
    println!("  Date format:       {}", settings.date_format);
    println!("  Week starts on:    {}", settings.week_start());
    println!("  Recent count:      {}", settings.recent_count);
    println!("  Top categories:    {}", settings.top_categories);
    println!();
    println!("Data:");
    println!("  Transactions: {}", storage.transactions.count()?);
    println!("  Categories:   {}", storage.categories.count()?);
    println!("  Reminders:    {}", storage.reminders.count()?);

    Ok(())
}

//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{FinotaError, FinotaResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    TransactionsCsv {
        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all data as JSON
    Json {
        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all data as YAML
    Yaml {
        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinotaResult<()> {
    match cmd {
        ExportCommands::TransactionsCsv { output } => {
            let mut writer = open_output(output.as_deref())?;
            let count = export_transactions_csv(storage, &mut writer)?;
            finish(writer, output.as_deref(), &format!("{} transaction(s)", count))
        }
        ExportCommands::Json { output } => {
            let mut writer = open_output(output.as_deref())?;
            let export = export_full_json(storage, &mut writer)?;
            finish(
                writer,
                output.as_deref(),
                &format!("{} transaction(s)", export.metadata.transaction_count),
            )
        }
        ExportCommands::Yaml { output } => {
            let mut writer = open_output(output.as_deref())?;
            let export = export_full_yaml(storage, &mut writer)?;
            finish(
                writer,
                output.as_deref(),
                &format!("{} transaction(s)", export.metadata.transaction_count),
            )
        }
    }
}

fn open_output(path: Option<&Path>) -> FinotaResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FinotaError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn finish(mut writer: Box<dyn Write>, path: Option<&Path>, what: &str) -> FinotaResult<()> {
    writer
        .flush()
        .map_err(|e| FinotaError::Export(e.to_string()))?;

    if let Some(path) = path {
        println!("Exported {} to: {}", what, path.display());
    }
    Ok(())
}

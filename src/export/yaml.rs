//! YAML export for a human-readable copy of all data

use std::io::Write;

use crate::error::{FinotaError, FinotaResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export everything as YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FinotaResult<FullExport> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# Finota data export\n# Generated: {}\n# App version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FinotaError::Export(e.to_string()))?;

    serde_yaml::to_writer(&mut *writer, &export)
        .map_err(|e| FinotaError::Export(e.to_string()))?;

    Ok(export)
}

use anyhow::Result;
use clap::ValueEnum;
use std::io::{self, Write};

use crate::engine::ExpatFilter;
use crate::models::Expat;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// Write `expats` to `writer` in the requested format
pub fn write_expats<W: Write>(writer: W, expats: &[&Expat], format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, expats)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for expat in expats {
                csv_writer.serialize(expat)?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}

/// Execute the export command. Output goes to stdout only.
pub fn run_export(store: &Store, filter: &ExpatFilter, format: ExportFormat) -> Result<()> {
    let shown = filter.apply(store.records());
    let stdout = io::stdout();
    write_expats(stdout.lock(), &shown, format)?;
    tracing::info!(count = shown.len(), ?format, "exported expats");
    Ok(())
}

// src/process/mod.rs
pub mod report;

pub use report::Report;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::expand::{expand, OVERHEADS};
use crate::io::{self, Format};
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};

/// Read `config.source`, expand it, and write the result to
/// `config.destination`.
///
/// - Fails with [`Error::NotFound`] before anything else if the source is missing.
/// - Resolves both formats before reading, so an unwritable destination
///   extension is reported without loading the source.
/// - Writes nothing if reading or expanding fails.
#[instrument(level = "info", skip(config), fields(source = %config.source.display(), destination = %config.destination.display()))]
pub fn run(config: &Config) -> Result<Report> {
    let start = Instant::now();

    // 1) source must exist
    if !config.source.exists() {
        return Err(Error::NotFound(config.source.clone()));
    }

    // 2) pick formats
    let input_format = match config.input_format {
        Some(f) => f,
        None => Format::for_source(&config.source)?,
    };
    let output_format = match config.output_format {
        Some(f) => f,
        None => Format::for_destination(&config.destination)?,
    };

    // 3) read → expand → write
    let table = io::read_table(&config.source, input_format)?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "read source"
    );

    let expanded = expand(&table)?;
    let blocks = (expanded.row_count() - table.row_count()) / OVERHEADS.len();

    io::write_table(
        &expanded,
        &config.destination,
        output_format,
        &config.sheet_name,
    )?;

    let report = Report {
        source: config.source.clone(),
        destination: config.destination.clone(),
        rows_in: table.row_count(),
        rows_out: expanded.row_count(),
        blocks,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    };
    info!(
        blocks = report.blocks,
        rows_out = report.rows_out,
        elapsed = ?start.elapsed(),
        "wrote destination"
    );
    Ok(report)
}

/// Expand `source` into `destination` with default settings, returning the
/// success message.
pub fn process_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<String> {
    let config = Config::new(source.as_ref(), destination.as_ref());
    run(&config).map(|report| report.message())
}

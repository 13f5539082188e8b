use anyhow::{Context, Result};
use clap::Parser;
use sku_overheads::{io::Format, process, Config};
use std::{env, path::PathBuf};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Add FMOH / VMOH / NDOH overhead rows after each run of identical SKUs.
#[derive(Parser, Debug)]
#[command(name = "sku-overheads", version)]
struct Args {
    /// Spreadsheet to read (xlsx, xlsm, xlsb, xls, ods or csv)
    source: PathBuf,

    /// File to write (xlsx or csv)
    destination: PathBuf,

    /// Read the source as this format instead of guessing from its extension
    #[arg(long, value_enum)]
    input_format: Option<Format>,

    /// Write the destination as this format instead of guessing from its extension
    #[arg(long, value_enum)]
    output_format: Option<Format>,

    /// Worksheet name for workbook output
    #[arg(long, default_value = sku_overheads::config::DEFAULT_SHEET_NAME)]
    sheet_name: String,

    /// Print the run report (or the error) as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn to_config(&self) -> Config {
        Config::new(&self.source, &self.destination)
            .with_input_format(self.input_format)
            .with_output_format(self.output_format)
            .with_sheet_name(&self.sheet_name)
    }
}

/// JSON printed in place of the report when `--json` is set and the run fails.
fn error_body(e: &sku_overheads::Error) -> serde_json::Value {
    serde_json::json!({ "error": e.to_string(), "kind": e.kind() })
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    // RUST_LOG wins; otherwise LOG_LEVEL (default info), or debug with --verbose
    let default_level = if args.verbose {
        "debug".to_string()
    } else {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(default_level.parse().unwrap_or(Level::INFO.into()))
    });
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // ─── 2) run ──────────────────────────────────────────────────────
    let config = args.to_config();
    info!(source = %config.source.display(), destination = %config.destination.display(), "starting");

    match process::run(&config) {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.message());
            }
            Ok(())
        }
        Err(e) => {
            error!(kind = ?e.kind(), "{}", e);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&error_body(&e))?);
            }
            Err(e).with_context(|| format!("failed to process '{}'", config.source.display()))
        }
    }
}

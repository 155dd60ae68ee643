//! sheetfmt CLI - Convert a spreadsheet sheet to CSV files
//!
//! ```bash
//! sheetfmt -f stock.xlsx                      # stock.csv next to the input
//! sheetfmt -f stock.xlsx -c sheetfmt.yaml     # apply a configuration
//! sheetfmt -f stock.xlsx -o build/            # write into another directory
//! sheetfmt -f stock.xlsx --dry-run            # print the result as JSON
//! ```
//!
//! Diagnostics go to stderr (`RUST_LOG` controls the level). The completion
//! message, when configured, is printed to stdout.

use clap::Parser;
use sheetfmt::logs::log_error;
use sheetfmt::error::PipelineResult;
use sheetfmt::{convert_file, Config, ConvertOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetfmt")]
#[command(about = "Convert Excel to CSV", long_about = None)]
struct Cli {
    /// Specify the path of the file to be processed
    #[arg(short, long)]
    file: PathBuf,

    /// Specify the path of the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the output files (default: next to the input file)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Print the converted data as JSON instead of writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log_error(e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> PipelineResult<()> {
    let config = load_config(cli.config.as_deref())?;

    let options = ConvertOptions {
        out_dir: cli.out_dir.clone(),
        dry_run: cli.dry_run,
    };
    let report = convert_file(&cli.file, &config, &options)?;

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&report.output)?);
        return Ok(());
    }

    if !report.output.message.is_empty() {
        println!("{}", report.output.message);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> PipelineResult<Config> {
    match path {
        Some(p) => Ok(Config::load(p)?),
        None => Ok(Config::default()),
    }
}

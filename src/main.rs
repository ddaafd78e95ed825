//! CLI entry point for the fuel log analyzer.
//!
//! Loads a refill log from a CSV file or a spreadsheet link, derives
//! per-refill and per-month efficiency and spending figures, and exports
//! the resulting tables.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fuel_log_analyzer::analyzers::analyzer::analyze;
use fuel_log_analyzer::analyzers::schema::validate;
use fuel_log_analyzer::{
    config::AnalysisConfig,
    fetch::load_source,
    output::{export_monthly, export_records, to_json},
    parser::parse_table,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "fuel_log_analyzer")]
#[command(about = "Analyze a vehicle fuel refill log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a fuel log from a CSV file or spreadsheet URL
    Analyze {
        /// Path to a CSV file, or a URL (Google Sheets links are rewritten to CSV export)
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Leading records left out of the whole-log average mileage
        #[arg(long, env = "FUEL_SKIP_FIRST", default_value_t = AnalysisConfig::DEFAULT_SKIP_FIRST)]
        skip_first: usize,

        /// Write the detailed per-refill table to this CSV file
        #[arg(long)]
        details_out: Option<String>,

        /// Write the monthly summary table to this CSV file
        #[arg(long)]
        monthly_out: Option<String>,

        /// Print the full report as JSON to stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Check that a fuel log has the required columns
    Validate {
        /// Path to a CSV file or URL
        #[arg(value_name = "FILE_OR_URL")]
        source: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/fuel_log_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("fuel_log_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            skip_first,
            details_out,
            monthly_out,
            json,
        } => {
            let bytes = load_source(&source).await?;
            let table = parse_table(&bytes)?;
            let report = analyze(&table, &AnalysisConfig::new(skip_first))?;

            if !report.warnings.is_empty() {
                warn!(
                    count = report.warnings.len(),
                    "Some rows had problems; check dates are YYYY-MM and numbers are filled in"
                );
            }

            let rollup = &report.rollup;
            info!(
                total_fuel_litres = rollup.total_fuel_litres,
                total_spent = rollup.total_spent,
                total_distance = rollup.total_distance,
                average_mileage = rollup.average_mileage,
                overall_mileage = ?rollup.overall_mileage.value(),
                skip_first = rollup.skip_first,
                "Rollup"
            );

            for m in &report.monthly_summaries {
                info!(
                    month = %m.month,
                    total_distance = m.total_distance,
                    total_fuel_litres = m.total_fuel_litres,
                    total_spent = m.total_spent,
                    avg_mileage = m.avg_mileage,
                    best_mileage = m.best_mileage,
                    worst_mileage = m.worst_mileage,
                    refills = m.refill_count,
                    overall_mileage = ?m.overall_mileage.value(),
                    "Month"
                );
            }

            if let Some(path) = details_out {
                export_records(&path, &report)?;
            }
            if let Some(path) = monthly_out {
                export_monthly(&path, &report)?;
            }
            if json {
                println!("{}", to_json(&report)?);
            }
        }
        Commands::Validate { source } => {
            let bytes = load_source(&source).await?;
            let table = parse_table(&bytes)?;
            validate(&table)?;
            info!(
                columns = ?table.headers(),
                rows = table.len(),
                "Fuel log has all required columns"
            );
        }
    }

    Ok(())
}

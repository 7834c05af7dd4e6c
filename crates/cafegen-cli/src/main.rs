use std::path::PathBuf;

use cafegen_generate::{GenerateOptions, GenerationEngine, GenerationError};
use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "cafegen", version, about = "Coffee-chain sample dataset generator")]
struct Cli {
    /// Customer rows to generate.
    #[arg(long, default_value_t = 500)]
    customers: u64,
    /// Store rows to generate.
    #[arg(long, default_value_t = 5)]
    stores: u64,
    /// Transaction rows to generate.
    #[arg(long, default_value_t = 2500)]
    transactions: u64,
    /// Seed for the random stream.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Output directory for the CSV files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let options = GenerateOptions {
        out_dir: cli.out_dir,
        customers: cli.customers,
        stores: cli.stores,
        transactions: cli.transactions,
        seed: cli.seed,
    };

    let result = GenerationEngine::new(options).run()?;
    info!(
        run_id = %result.report.run_id,
        bytes_written = result.report.bytes_written,
        duration_ms = result.report.duration_ms,
        "run completed"
    );
    for table in &result.report.tables {
        println!("{}: {} rows", table.table, table.rows_generated);
    }
    Ok(())
}

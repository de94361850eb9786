use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prepaid-card settlement analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a settlement spreadsheet and print the report
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to the settlement spreadsheet (xlsx or delimited text)
    #[arg(default_value = "REGLEMENTS_CARTES_PREPAYEES_FAST_FOOD.xlsx")]
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let analysis = caisse_core::analyze_file(&args.file)
        .with_context(|| format!("failed to analyze {}", args.file.display()))?;

    let rendered = caisse_core::report::render(&analysis)?;
    print!("{rendered}");

    info!(
        retained_rows = analysis.cleaning.rows_retained,
        "analysis finished"
    );
    Ok(())
}

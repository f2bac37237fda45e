//! ragbench CLI
//!
//! Compares a sample retrieval run against a baseline dataset and prints
//! per-task and aggregated agreement metrics.
//!
//! ## Usage
//!
//! ```bash
//! ragbench evaluate --baseline baseline.json --sample samples.json
//! ragbench evaluate --baseline baseline.json --sample samples.json --format json
//! ```

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ragbench::{Dataset, EvaluationReport};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser)]
#[command(name = "ragbench")]
#[command(version)]
#[command(about = "RAG retrieval agreement metrics CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a sample run against a baseline dataset
    Evaluate {
        /// Path to the baseline dataset (.json or .jsonl)
        #[arg(short, long)]
        baseline: PathBuf,

        /// Path to the sample dataset (.json or .jsonl)
        #[arg(short, long)]
        sample: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show metric info
    Info,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            baseline,
            sample,
            format,
        } => run_evaluate(&baseline, &sample, format)?,
        Commands::Info => run_info(),
    }

    Ok(())
}

fn run_info() {
    println!("ragbench");
    println!("========");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Metrics:");
    println!("  - recall_by_page_number    best-match page overlap, baseline side");
    println!("  - precision_by_page_number best-match page overlap, sample side");
    println!("  - recall_by_char           character multiset overlap, cross product");
    println!("  - precision_by_char        character multiset overlap, cross product");
}

fn run_evaluate(baseline: &PathBuf, sample: &PathBuf, format: OutputFormat) -> Result<()> {
    let baseline = Dataset::load(baseline)
        .with_context(|| format!("Failed to load baseline dataset: {}", baseline.display()))?;
    let sample = Dataset::load(sample)
        .with_context(|| format!("Failed to load sample dataset: {}", sample.display()))?;

    let report = EvaluationReport::evaluate(&baseline, &sample)
        .context("Failed to evaluate sample against baseline")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &EvaluationReport) {
    println!("Dataset: {}", report.dataset);
    println!("Tasks evaluated: {}", report.task_count);
    println!("{}", "-".repeat(72));
    println!(
        "{:<12} {:>14} {:>14} {:>14} {:>14}",
        "task", "recall(page)", "prec(page)", "recall(char)", "prec(char)"
    );

    for task in &report.tasks {
        println!(
            "{:<12} {:>14.4} {:>14.4} {:>14.4} {:>14.4}",
            task.task_id,
            task.recall_by_page_number,
            task.precision_by_page_number,
            task.recall_by_char,
            task.precision_by_char,
        );
    }

    println!("{}", "-".repeat(72));
    println!(
        "{:<12} {:>14.4} {:>14.4} {:>14.4} {:>14.4}",
        "mean",
        report.mean_recall_by_page_number,
        report.mean_precision_by_page_number,
        report.mean_recall_by_char,
        report.mean_precision_by_char,
    );
}

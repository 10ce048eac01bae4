//! eCQM command-line interface

mod evaluate;
mod ndjson;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// eCQM command-line tool
#[derive(Parser)]
#[command(name = "ecqm")]
#[command(author, version, about = "Electronic Clinical Quality Measure (eCQM) tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate all measures over an NDJSON population
    Evaluate {
        /// Directory containing one <ResourceType>.ndjson file per resource type
        #[arg(short, long)]
        data_dir: PathBuf,
        /// Measurement period start (ISO date or date-time)
        #[arg(long, default_value = "2018-01-01")]
        start: String,
        /// Measurement period end (ISO date or date-time)
        #[arg(long, default_value = "2022-01-01")]
        end: String,
        /// Directory to write per-measure result sets into
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Check the population subset invariants on each report
        #[arg(long)]
        check: bool,
        /// Print progress detail on stderr
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    match cli.command {
        Commands::Evaluate {
            data_dir,
            start,
            end,
            output_dir,
            check,
            verbose,
        } => evaluate::evaluate(evaluate::EvaluateConfig {
            data_dir,
            start,
            end,
            output_dir,
            check,
            verbose,
        }),
    }
}

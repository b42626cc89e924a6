//! Command-line interface for the countyscope scoring pipeline.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod aggregate;
mod error;
mod score;

pub use error::CliError;

use aggregate::{AggregateArgs, run_aggregate};
use score::{ScoreArgs, run_score};

const ARG_ESTABLISHMENTS: &str = "establishments";
const ARG_DEMOGRAPHICS: &str = "demographics";
const ARG_FALLBACK_DEMOGRAPHICS: &str = "fallback-demographics";
const ARG_INDUSTRIES: &str = "industries";
const ARG_OUTPUT_DIR: &str = "output-dir";
const ARG_INCOME_WEIGHT: &str = "income-weight";
const ARG_GROWTH_WEIGHT: &str = "growth-weight";
const ARG_CAP_PERCENTILE: &str = "cap-percentile";
const ARG_ROWS: &str = "rows";
const ARG_OUTPUT: &str = "output";
const ENV_ESTABLISHMENTS: &str = "COUNTYSCOPE_CMDS_SCORE_ESTABLISHMENTS";
const ENV_SCORE_INDUSTRIES: &str = "COUNTYSCOPE_CMDS_SCORE_INDUSTRIES";
const ENV_ROWS: &str = "COUNTYSCOPE_CMDS_AGGREGATE_ROWS";
const ENV_AGGREGATE_INDUSTRIES: &str = "COUNTYSCOPE_CMDS_AGGREGATE_INDUSTRIES";

/// Run the countyscope CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => {
            run_score(args)?;
        }
        Command::Aggregate(args) => {
            run_aggregate(args)?;
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "countyscope",
    about = "Batch opportunity scoring for U.S. counties by industry",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every catalog industry and write one JSON file per industry.
    Score(ScoreArgs),
    /// Aggregate per-NAICS establishment rows into per-industry counts.
    Aggregate(AggregateArgs),
}

/// Fail unless `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match countyscope_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;

//! Aggregate command: fold per-NAICS establishment rows into industry counts.

use camino::Utf8PathBuf;
use clap::Parser;
use countyscope_core::EstablishmentDataset;
use countyscope_data::{
    NaicsIndex, aggregate_establishments, load_catalog, load_establishment_rows, write_json,
};
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_INDUSTRIES, ARG_OUTPUT, ARG_ROWS, CliError, ENV_AGGREGATE_INDUSTRIES, ENV_ROWS,
    require_existing,
};

const DEFAULT_OUTPUT: &str = "establishments.json";

/// CLI arguments for the `aggregate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Sum county establishment rows into the per-industry counts \
                 consumed by `score`. Each row names a county, a NAICS code \
                 and an establishment count; rows whose NAICS code no \
                 catalog industry lists are ignored.",
    about = "Aggregate establishment rows by industry"
)]
#[ortho_config(prefix = "COUNTYSCOPE")]
pub(crate) struct AggregateArgs {
    /// Path to a JSON array of `{county, naics, establishments}` rows.
    #[arg(long = ARG_ROWS, value_name = "path")]
    #[serde(default)]
    pub(crate) rows: Option<Utf8PathBuf>,
    /// Path to the industry catalog JSON.
    #[arg(long = ARG_INDUSTRIES, value_name = "path")]
    #[serde(default)]
    pub(crate) industries: Option<Utf8PathBuf>,
    /// Destination for the aggregated establishment counts.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl AggregateArgs {
    pub(crate) fn into_config(self) -> Result<AggregateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AggregateConfig::try_from(merged)
    }
}

/// Resolved `aggregate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AggregateConfig {
    pub(crate) rows: Utf8PathBuf,
    pub(crate) industries: Utf8PathBuf,
    pub(crate) output: Utf8PathBuf,
}

impl AggregateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.rows, ARG_ROWS)?;
        require_existing(&self.industries, ARG_INDUSTRIES)?;
        Ok(())
    }
}

impl TryFrom<AggregateArgs> for AggregateConfig {
    type Error = CliError;

    fn try_from(args: AggregateArgs) -> Result<Self, Self::Error> {
        let rows = args.rows.ok_or(CliError::MissingArgument {
            field: ARG_ROWS,
            env: ENV_ROWS,
        })?;
        let industries = args.industries.ok_or(CliError::MissingArgument {
            field: ARG_INDUSTRIES,
            env: ENV_AGGREGATE_INDUSTRIES,
        })?;
        let output = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT));
        Ok(Self {
            rows,
            industries,
            output,
        })
    }
}

pub(crate) fn run_aggregate(args: AggregateArgs) -> Result<EstablishmentDataset, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_aggregate(&config)
}

/// Aggregate the configured rows and write the establishment dataset.
pub(crate) fn execute_aggregate(
    config: &AggregateConfig,
) -> Result<EstablishmentDataset, CliError> {
    let catalog = load_catalog(&config.industries)?;
    let index = NaicsIndex::from_catalog(&catalog);
    if index.is_empty() {
        warn!("catalog lists no NAICS codes; every row will be ignored");
    }
    let rows = load_establishment_rows(&config.rows)?;
    let dataset = aggregate_establishments(&rows, &index);
    write_json(&config.output, &dataset)?;
    info!(
        "Wrote establishment counts for {} industries to {}",
        dataset.len(),
        config.output
    );
    Ok(dataset)
}

//! Score command implementation for the countyscope CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use countyscope_core::{ScoringConfig, ScoringWeights, StateTable};
use countyscope_data::{
    DemographicsSource, load_catalog, load_demographics, load_establishments, write_scores,
};
use countyscope_scorer::{RunSummary, score_catalog};
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CAP_PERCENTILE, ARG_DEMOGRAPHICS, ARG_ESTABLISHMENTS, ARG_FALLBACK_DEMOGRAPHICS,
    ARG_GROWTH_WEIGHT, ARG_INCOME_WEIGHT, ARG_INDUSTRIES, ARG_OUTPUT_DIR, CliError,
    ENV_ESTABLISHMENTS, ENV_SCORE_INDUSTRIES, require_existing,
};

const DEFAULT_OUTPUT_DIR: &str = "scores";

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every industry in the catalog against the processed \
                 establishment and demographic snapshots, writing one JSON \
                 file per industry. Paths can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Compute county opportunity scores"
)]
#[ortho_config(prefix = "COUNTYSCOPE")]
pub(crate) struct ScoreArgs {
    /// Path to the establishment counts JSON (`{industry: {county: count}}`).
    #[arg(long = ARG_ESTABLISHMENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) establishments: Option<Utf8PathBuf>,
    /// Path to the processed demographics JSON.
    #[arg(long = ARG_DEMOGRAPHICS, value_name = "path")]
    #[serde(default)]
    pub(crate) demographics: Option<Utf8PathBuf>,
    /// Demographics used when the processed snapshot is absent or empty.
    #[arg(long = ARG_FALLBACK_DEMOGRAPHICS, value_name = "path")]
    #[serde(default)]
    pub(crate) fallback_demographics: Option<Utf8PathBuf>,
    /// Path to the industry catalog JSON.
    #[arg(long = ARG_INDUSTRIES, value_name = "path")]
    #[serde(default)]
    pub(crate) industries: Option<Utf8PathBuf>,
    /// Directory receiving `<industry>.json` score files.
    #[arg(long = ARG_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
    /// Weight applied to normalised median income (default 0.3).
    #[arg(long = ARG_INCOME_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) income_weight: Option<f64>,
    /// Weight applied to normalised population growth (default 0.2).
    #[arg(long = ARG_GROWTH_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) growth_weight: Option<f64>,
    /// Percentile of observed ratios imputed for counties without
    /// establishments (default 0.95).
    #[arg(long = ARG_CAP_PERCENTILE, value_name = "fraction")]
    #[serde(default)]
    pub(crate) cap_percentile: Option<f64>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) establishments: Utf8PathBuf,
    pub(crate) demographics: Option<Utf8PathBuf>,
    pub(crate) fallback_demographics: Option<Utf8PathBuf>,
    pub(crate) industries: Utf8PathBuf,
    pub(crate) output_dir: Utf8PathBuf,
    pub(crate) scoring: ScoringConfig,
}

impl ScoreConfig {
    /// Check the required snapshots exist and the output path is usable.
    ///
    /// Demographic snapshots are optional: a missing file is treated as empty.
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.establishments, ARG_ESTABLISHMENTS)?;
        require_existing(&self.industries, ARG_INDUSTRIES)?;
        Self::require_output_dir(&self.output_dir)
    }

    fn require_output_dir(path: &Utf8Path) -> Result<(), CliError> {
        match countyscope_fs::file_is_file(path) {
            Ok(true) => Err(CliError::OutputDirectoryNotDirectory {
                path: path.to_path_buf(),
            }),
            _ => Ok(()),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let establishments = args.establishments.ok_or(CliError::MissingArgument {
            field: ARG_ESTABLISHMENTS,
            env: ENV_ESTABLISHMENTS,
        })?;
        let industries = args.industries.ok_or(CliError::MissingArgument {
            field: ARG_INDUSTRIES,
            env: ENV_SCORE_INDUSTRIES,
        })?;
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_DIR));

        let defaults = ScoringConfig::default();
        let weights = ScoringWeights::new(
            args.income_weight
                .unwrap_or_else(|| defaults.weights().income()),
            args.growth_weight
                .unwrap_or_else(|| defaults.weights().growth()),
        )?;
        let cap_percentile = args
            .cap_percentile
            .unwrap_or_else(|| defaults.cap_percentile());
        let scoring = ScoringConfig::new(StateTable::default(), weights, cap_percentile)?;

        Ok(Self {
            establishments,
            demographics: args.demographics,
            fallback_demographics: args.fallback_demographics,
            industries,
            output_dir,
            scoring,
        })
    }
}

/// Outcome of a completed `score` run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreReport {
    /// Industry and county counts for the run.
    pub(crate) summary: RunSummary,
    /// Score files written, in catalog order.
    pub(crate) written: Vec<Utf8PathBuf>,
    /// Snapshot that supplied the demographic records.
    pub(crate) demographics: DemographicsSource,
}

impl ScoreReport {
    /// Log the completion summary, including industries with no scores.
    fn log_completion(&self, output_dir: &Utf8Path) {
        info!(
            "Wrote {} industry score files to {output_dir}",
            self.written.len()
        );
        info!(
            "{} industries have scored counties ({:?} demographics)",
            self.summary.industries_scored, self.demographics
        );
        if !self.summary.empty_industries.is_empty() {
            info!(
                "empty industries: {}",
                self.summary.empty_industries.join(", ")
            );
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<ScoreReport, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_score(&config)
}

/// Load the snapshots, score every industry and write the results.
///
/// A failed write is logged and the remaining industries still run; the
/// command fails afterwards if any write failed.
pub(crate) fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    let catalog = load_catalog(&config.industries)?;
    let establishments = load_establishments(&config.establishments)?;
    let demographics = load_demographics(
        config.demographics.as_deref(),
        config.fallback_demographics.as_deref(),
    )?;

    let run = score_catalog(
        &catalog,
        &establishments,
        &demographics.records,
        &config.scoring,
    );
    let summary = run.summary();

    let mut written = Vec::with_capacity(catalog.len());
    let mut failed = 0_usize;
    for industry in run.industries() {
        match write_scores(&config.output_dir, industry.industry_id(), industry.scores()) {
            Ok(path) => {
                info!(
                    "  {}: {} counties scored -> {path}",
                    industry.industry_id(),
                    industry.len()
                );
                written.push(path);
            }
            Err(err) => {
                warn!("skipping industry {}: {err}", industry.industry_id());
                failed = failed.saturating_add(1);
            }
        }
    }
    let report = ScoreReport {
        summary,
        written,
        demographics: demographics.source,
    };
    report.log_completion(&config.output_dir);

    if failed > 0 {
        return Err(CliError::WriteScores {
            failed,
            output_dir: config.output_dir.clone(),
            summary: report.summary,
        });
    }
    Ok(report)
}

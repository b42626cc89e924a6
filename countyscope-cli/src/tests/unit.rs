//! Focused unit tests covering CLI parsing and configuration validation.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::aggregate::{AggregateArgs, AggregateConfig};
use crate::score::{ScoreArgs, ScoreConfig};
use camino::Utf8PathBuf;
use clap::Parser;
use countyscope_core::{ScoringConfig, ScoringConfigError};
use rstest::rstest;

fn paths(
    establishments: Option<&str>,
    industries: Option<&str>,
) -> (Option<Utf8PathBuf>, Option<Utf8PathBuf>) {
    (
        establishments.map(Utf8PathBuf::from),
        industries.map(Utf8PathBuf::from),
    )
}

#[rstest]
#[case(None, Some("industries.json"), ARG_ESTABLISHMENTS, ENV_ESTABLISHMENTS)]
#[case(Some("cbp.json"), None, ARG_INDUSTRIES, ENV_SCORE_INDUSTRIES)]
fn converting_score_without_required_fields_errors(
    #[case] establishments: Option<&str>,
    #[case] industries: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let (establishments, industries) = paths(establishments, industries);
    let args = ScoreArgs {
        establishments,
        industries,
        ..ScoreArgs::default()
    };
    let err = ScoreConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn score_config_applies_defaults() {
    let args = ScoreArgs {
        establishments: Some(Utf8PathBuf::from("cbp.json")),
        industries: Some(Utf8PathBuf::from("industries.json")),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(config.output_dir, Utf8PathBuf::from("scores"));
    assert_eq!(config.demographics, None);
    assert_eq!(config.scoring, ScoringConfig::default());
}

#[rstest]
fn score_config_applies_weight_overrides() {
    let args = ScoreArgs {
        establishments: Some(Utf8PathBuf::from("cbp.json")),
        industries: Some(Utf8PathBuf::from("industries.json")),
        income_weight: Some(0.5),
        growth_weight: Some(0.0),
        cap_percentile: Some(0.9),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(config.scoring.weights().income(), 0.5);
    assert_eq!(config.scoring.weights().growth(), 0.0);
    assert_eq!(config.scoring.cap_percentile(), 0.9);
}

#[rstest]
#[case::negative_weight(Some(-0.1), None)]
#[case::percentile_above_one(None, Some(1.5))]
fn score_config_rejects_invalid_scoring_values(
    #[case] income_weight: Option<f64>,
    #[case] cap_percentile: Option<f64>,
) {
    let args = ScoreArgs {
        establishments: Some(Utf8PathBuf::from("cbp.json")),
        industries: Some(Utf8PathBuf::from("industries.json")),
        income_weight,
        cap_percentile,
        ..ScoreArgs::default()
    };
    let err = ScoreConfig::try_from(args).expect_err("invalid scoring values");
    match err {
        CliError::ScoringConfig(
            ScoringConfigError::InvalidWeight { .. } | ScoringConfigError::InvalidPercentile { .. },
        ) => {}
        other => panic!("expected ScoringConfig error, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_files() {
    let workspace = Workspace::new();
    let config = workspace.score_config();
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_ESTABLISHMENTS);
            assert_eq!(path, workspace.path("cbp_processed.json"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new().with_snapshots();
    let mut config = workspace.score_config();
    std::fs::create_dir_all(workspace.path("catalog")).expect("create dir");
    config.industries = workspace.path("catalog");
    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_INDUSTRIES),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_output_file() {
    let workspace = Workspace::new().with_snapshots();
    let config = workspace.score_config();
    write_utf8(&config.output_dir, b"not a directory");
    let err = config
        .validate_sources()
        .expect_err("expected output directory validation to fail");
    match err {
        CliError::OutputDirectoryNotDirectory { path } => assert_eq!(path, config.output_dir),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_tolerates_missing_demographics() {
    let workspace = Workspace::new();
    workspace.write("industries.json", "[]");
    workspace.write("cbp_processed.json", "{}");
    let config = workspace.score_config();
    config
        .validate_sources()
        .expect("demographic snapshots are optional");
}

#[rstest]
fn cli_parses_score_flags() {
    let cli = Cli::try_parse_from([
        "countyscope",
        "score",
        "--establishments",
        "cbp.json",
        "--industries",
        "industries.json",
        "--fallback-demographics",
        "counties.json",
        "--growth-weight",
        "0.25",
    ])
    .expect("flags should parse");
    let Command::Score(args) = cli.command else {
        panic!("expected score command");
    };
    assert_eq!(args.establishments, Some(Utf8PathBuf::from("cbp.json")));
    assert_eq!(
        args.fallback_demographics,
        Some(Utf8PathBuf::from("counties.json"))
    );
    assert_eq!(args.growth_weight, Some(0.25));
    assert_eq!(args.output_dir, None);
}

#[rstest]
fn cli_rejects_non_numeric_weights() {
    let err = Cli::try_parse_from(["countyscope", "score", "--income-weight", "high"])
        .expect_err("weight must be numeric");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn converting_aggregate_without_rows_errors() {
    let args = AggregateArgs {
        industries: Some(Utf8PathBuf::from("industries.json")),
        ..AggregateArgs::default()
    };
    let err = AggregateConfig::try_from(args).expect_err("missing rows should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ROWS);
            assert_eq!(env, ENV_ROWS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn aggregate_config_defaults_output_path() {
    let args = AggregateArgs {
        rows: Some(Utf8PathBuf::from("rows.json")),
        industries: Some(Utf8PathBuf::from("industries.json")),
        output: None,
    };
    let config = AggregateConfig::try_from(args).expect("config should build");
    assert_eq!(config.output, Utf8PathBuf::from("establishments.json"));
}

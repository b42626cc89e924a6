//! Test helpers for writing snapshot fixtures and layering overrides.

use super::*;
use crate::score::{ScoreArgs, ScoreConfig};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const INDUSTRIES: &str = r##"[
  {"id": "restaurants", "name": "Restaurants", "color": "#e4572e", "naicsCodes": ["722511", "722513"]},
  {"id": "grocery", "name": "Grocery Stores", "color": "#29335c", "naicsCodes": ["445110"]}
]"##;

pub(super) const ESTABLISHMENTS: &str = r#"{
  "restaurants": {"01001": 10, "01003": 20}
}"#;

pub(super) const DEMOGRAPHICS: &str = r#"{
  "01001": {"population": 50000, "medianIncome": 50000, "populationGrowth": 1.5,
            "name": "County A", "state": "AL"},
  "01003": {"population": 100000, "medianIncome": 60000, "populationGrowth": 2.0,
            "name": "County B", "state": "AL"},
  "01005": {"population": 30000, "medianIncome": 40000, "populationGrowth": 0.5,
            "name": "County C", "state": ""}
}"#;

pub(super) const ROWS: &str = r#"[
  {"county": "01001", "naics": "722511", "establishments": 6},
  {"county": "01001", "naics": "722513/", "establishments": 4},
  {"county": "01003", "naics": "722511", "establishments": 20},
  {"county": "01003", "naics": "445110", "establishments": 3},
  {"county": "01005", "naics": "811111", "establishments": 9}
]"#;

/// Temporary directory holding snapshot fixtures for one test.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    /// Write the standard catalog, establishment and demographic snapshots.
    pub(super) fn with_snapshots(self) -> Self {
        self.write("industries.json", INDUSTRIES);
        self.write("cbp_processed.json", ESTABLISHMENTS);
        self.write("acs_demographics.json", DEMOGRAPHICS);
        self
    }

    /// Score configuration pointing at the standard snapshots.
    pub(super) fn score_config(&self) -> ScoreConfig {
        ScoreConfig::try_from(ScoreArgs {
            establishments: Some(self.path("cbp_processed.json")),
            demographics: Some(self.path("acs_demographics.json")),
            fallback_demographics: Some(self.path("counties.json")),
            industries: Some(self.path("industries.json")),
            output_dir: Some(self.path("scores")),
            ..ScoreArgs::default()
        })
        .expect("score config should build")
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

pub(super) fn read_json(path: &Utf8Path) -> serde_json::Value {
    let contents =
        fs::read_to_string(path).unwrap_or_else(|err| panic!("failed to read {path}: {err}"));
    serde_json::from_str(&contents).unwrap_or_else(|err| panic!("invalid JSON in {path}: {err}"))
}

/// Values a config file or environment layer may supply.
#[derive(Debug, Clone, Default)]
pub(super) struct LayerOverrides {
    pub(super) establishments: Option<Utf8PathBuf>,
    pub(super) industries: Option<Utf8PathBuf>,
    pub(super) output_dir: Option<Utf8PathBuf>,
    pub(super) income_weight: Option<f64>,
}

/// Resolve `cli_args` as if environment and file layers sat beneath them.
///
/// CLI values win over environment values, which win over file values.
pub(super) fn merge_layers(
    mut cli_args: ScoreArgs,
    file_layer: Option<LayerOverrides>,
    env_layer: Option<LayerOverrides>,
) -> Result<ScoreConfig, CliError> {
    merge_field(
        &mut cli_args.establishments,
        extract_field(env_layer.as_ref(), |layer| &layer.establishments),
        extract_field(file_layer.as_ref(), |layer| &layer.establishments),
    );
    merge_field(
        &mut cli_args.industries,
        extract_field(env_layer.as_ref(), |layer| &layer.industries),
        extract_field(file_layer.as_ref(), |layer| &layer.industries),
    );
    merge_field(
        &mut cli_args.output_dir,
        extract_field(env_layer.as_ref(), |layer| &layer.output_dir),
        extract_field(file_layer.as_ref(), |layer| &layer.output_dir),
    );
    merge_field(
        &mut cli_args.income_weight,
        extract_field(env_layer.as_ref(), |layer| &layer.income_weight),
        extract_field(file_layer.as_ref(), |layer| &layer.income_weight),
    );
    ScoreConfig::try_from(cli_args)
}

fn merge_field<T: Clone>(target: &mut Option<T>, env_value: Option<T>, file_value: Option<T>) {
    if target.is_none()
        && let Some(value) = env_value.or(file_value)
    {
        *target = Some(value);
    }
}

fn extract_field<T: Clone>(
    layer: Option<&LayerOverrides>,
    accessor: fn(&LayerOverrides) -> &Option<T>,
) -> Option<T> {
    layer.and_then(|entry| accessor(entry).clone())
}

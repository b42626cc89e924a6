//! Error types emitted by the countyscope CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use countyscope_core::ScoringConfigError;
use countyscope_data::DataError;
use countyscope_scorer::RunSummary;
use thiserror::Error;

/// Errors emitted by the countyscope CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The output directory exists but is not a directory.
    #[error("output directory {path:?} is not a directory")]
    OutputDirectoryNotDirectory { path: Utf8PathBuf },
    /// Weight or percentile overrides were rejected.
    #[error("invalid scoring configuration: {0}")]
    ScoringConfig(#[from] ScoringConfigError),
    /// Loading an input snapshot or writing an output failed.
    #[error(transparent)]
    Data(#[from] DataError),
    /// Some industry score files could not be written.
    #[error("failed to write {failed} industry score files to {output_dir:?}")]
    WriteScores {
        failed: usize,
        output_dir: Utf8PathBuf,
        /// Summary of the run, covering the industries that were written.
        summary: RunSummary,
    },
}

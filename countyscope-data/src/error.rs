//! Errors raised while reading snapshots and writing score files.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned by the snapshot loaders and the score writer.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening an input snapshot failed.
    #[error("failed to open {path:?}: {source}")]
    OpenFile {
        /// Snapshot location.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot was not valid JSON for the expected shape.
    #[error("failed to parse JSON at {path:?}: {source}")]
    ParseJson {
        /// Snapshot location.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the output directory failed.
    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing an output file failed.
    #[error("failed to write {path:?}: {source}")]
    WriteFile {
        /// Output location.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Encoding an output document failed.
    #[error("failed to serialise {path:?}: {source}")]
    Serialise {
        /// Output location.
        path: Utf8PathBuf,
        /// Encoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The industry identifier cannot be used as a file name.
    #[error("industry id {id:?} cannot be used as an output file name")]
    InvalidIndustryId {
        /// Rejected identifier.
        id: String,
    },
}

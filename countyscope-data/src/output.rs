//! Writers for score files and aggregated establishment snapshots.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use countyscope_core::{CountyCode, CountyScore};
use countyscope_fs::{create_utf8_file, ensure_dir};
use serde::Serialize;

use crate::DataError;

/// Write `value` as pretty-printed JSON with a trailing newline.
///
/// Missing parent directories are created first.
///
/// # Errors
/// Returns [`DataError::CreateDir`], [`DataError::Serialise`] or
/// [`DataError::WriteFile`] for the step that failed.
pub fn write_json<T: Serialize + ?Sized>(path: &Utf8Path, value: &T) -> Result<(), DataError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).map_err(|source| DataError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let payload = serde_json::to_vec_pretty(value).map_err(|source| DataError::Serialise {
        path: path.to_path_buf(),
        source,
    })?;
    let write_err = |source: std::io::Error| DataError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = create_utf8_file(path).map_err(write_err)?;
    file.write_all(&payload).map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    Ok(())
}

/// Path of the score file for `industry_id` under `output_dir`.
///
/// # Errors
/// Returns [`DataError::InvalidIndustryId`] when the identifier is empty,
/// contains a path separator, or names the current or parent directory.
pub fn score_file_path(output_dir: &Utf8Path, industry_id: &str) -> Result<Utf8PathBuf, DataError> {
    let unusable = industry_id.is_empty()
        || industry_id == "."
        || industry_id == ".."
        || industry_id.contains(['/', '\\']);
    if unusable {
        return Err(DataError::InvalidIndustryId {
            id: industry_id.to_owned(),
        });
    }
    Ok(output_dir.join(format!("{industry_id}.json")))
}

/// Write one industry's scores to `<output_dir>/<industry_id>.json`.
///
/// Returns the path written.
///
/// # Errors
/// Fails when the identifier is unusable as a file name or the file cannot
/// be written.
pub fn write_scores(
    output_dir: &Utf8Path,
    industry_id: &str,
    scores: &BTreeMap<CountyCode, CountyScore>,
) -> Result<Utf8PathBuf, DataError> {
    let path = score_file_path(output_dir, industry_id)?;
    write_json(&path, scores)?;
    Ok(path)
}

//! JSON snapshot loaders.

use std::io::{self, BufReader};

use camino::Utf8Path;
use countyscope_core::{Demographics, EstablishmentDataset, IndustryCatalog};
use countyscope_fs::open_utf8_file;
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::DataError;

/// Where the demographic records of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemographicsSource {
    /// The processed snapshot supplied the records.
    Primary,
    /// The processed snapshot was absent or empty; the fallback was used.
    Fallback,
    /// Neither snapshot had records. Scoring weighs establishments only.
    Unavailable,
}

/// Demographic records together with their provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDemographics {
    /// Records keyed by raw county code.
    pub records: Demographics,
    /// Snapshot that supplied [`Self::records`].
    pub source: DemographicsSource,
}

/// Read and decode a JSON document.
///
/// # Errors
/// Returns [`DataError::OpenFile`] when the file cannot be opened and
/// [`DataError::ParseJson`] when it does not decode as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, DataError> {
    let file = open_utf8_file(path).map_err(|source| DataError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`read_json`], but a missing file yields `Ok(None)`.
fn read_optional_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<Option<T>, DataError> {
    match read_json(path) {
        Ok(value) => Ok(Some(value)),
        Err(DataError::OpenFile { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Load the establishment dataset (`{industry: {county: count}}`).
///
/// # Errors
/// Fails when the snapshot is missing or malformed; a run cannot proceed
/// without it.
pub fn load_establishments(path: &Utf8Path) -> Result<EstablishmentDataset, DataError> {
    let dataset: EstablishmentDataset = read_json(path)?;
    info!("loaded establishment counts for {} industries", dataset.len());
    Ok(dataset)
}

/// Load the industry catalog.
///
/// # Errors
/// Fails when the catalog is missing or malformed.
pub fn load_catalog(path: &Utf8Path) -> Result<IndustryCatalog, DataError> {
    let catalog: IndustryCatalog = read_json(path)?;
    info!("loaded {} industries", catalog.len());
    Ok(catalog)
}

/// Load demographic records, falling back when the primary snapshot is empty.
///
/// Absent paths and missing files both count as empty. When neither snapshot
/// has records the result is empty and a warning is logged; scoring still
/// proceeds on establishment counts alone.
///
/// # Errors
/// Fails when a snapshot exists but cannot be read or decoded.
pub fn load_demographics(
    primary: Option<&Utf8Path>,
    fallback: Option<&Utf8Path>,
) -> Result<LoadedDemographics, DataError> {
    let records = load_records(primary)?;
    info!("loaded demographics for {} counties", records.len());
    if !records.is_empty() {
        return Ok(LoadedDemographics {
            records,
            source: DemographicsSource::Primary,
        });
    }

    if let Some(path) = fallback {
        info!("primary demographics empty, falling back to {path}");
        let records = load_records(Some(path))?;
        info!("loaded fallback demographics for {} counties", records.len());
        if !records.is_empty() {
            return Ok(LoadedDemographics {
                records,
                source: DemographicsSource::Fallback,
            });
        }
    }

    warn!("no demographics available; scores use establishment counts only");
    Ok(LoadedDemographics {
        records: Demographics::new(),
        source: DemographicsSource::Unavailable,
    })
}

fn load_records(path: Option<&Utf8Path>) -> Result<Demographics, DataError> {
    match path {
        Some(path) => Ok(read_optional_json(path)?.unwrap_or_default()),
        None => Ok(Demographics::new()),
    }
}

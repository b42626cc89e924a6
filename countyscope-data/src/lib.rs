//! Snapshot I/O for the countyscope engine.
//!
//! Responsibilities:
//! - Load the establishment, demographic and catalog JSON snapshots.
//! - Fall back to a secondary demographic snapshot when the primary is empty.
//! - Aggregate per-NAICS establishment rows into per-industry counts.
//! - Write one pretty-printed score file per industry.
//!
//! Boundaries:
//! - Scoring rules live in `countyscope-scorer`; this crate never inspects
//!   county codes beyond passing them through.

#![forbid(unsafe_code)]

mod error;
mod naics;
mod output;
mod snapshot;

pub use error::DataError;
pub use naics::{
    EstablishmentRow, NaicsIndex, aggregate_establishments, clean_naics_code,
    load_establishment_rows,
};
pub use output::{score_file_path, write_json, write_scores};
pub use snapshot::{
    DemographicsSource, LoadedDemographics, load_catalog, load_demographics, load_establishments,
    read_json,
};

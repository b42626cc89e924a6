//! Core domain types for the countyscope scoring engine.
//!
//! The models describe the two input snapshots (demographic records and
//! per-industry establishment counts), the industry catalog that drives
//! iteration, and the [`CountyScore`] records consumed by the map frontend.
//! Lookup tables and scoring constants live in [`ScoringConfig`] so callers
//! pass them explicitly rather than relying on process-wide state.

#![forbid(unsafe_code)]

pub mod config;
pub mod county;
pub mod industry;
pub mod states;

pub use config::{ScoringConfig, ScoringConfigError, ScoringWeights};
pub use county::{
    CountyCode, CountyCodeError, CountyRecord, CountyScore, Demographics, EstablishmentCounts,
    EstablishmentDataset,
};
pub use industry::{IndustryCatalog, IndustryDefinition};
pub use states::StateTable;

//! Facade crate for the countyscope opportunity scoring engine.
//!
//! This crate re-exports the core domain types and the scoring entry points.
//! Parallel scoring across industries is enabled by the `parallel` feature.

#![forbid(unsafe_code)]

pub use countyscope_core::{
    CountyCode, CountyCodeError, CountyRecord, CountyScore, Demographics, EstablishmentCounts,
    EstablishmentDataset, IndustryCatalog, IndustryDefinition, ScoringConfig, ScoringConfigError,
    ScoringWeights, StateTable,
};

pub use countyscope_scorer::{
    CoverageStatus, IndustryScores, RunSummary, ScoringRun, score_catalog, score_industry,
};

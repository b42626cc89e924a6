//! Opportunity scoring for U.S. counties.
//!
//! For each industry in the catalog the engine
//! - merges the establishment and demographic snapshots into a set of valid
//!   county codes ([`union_county_codes`]),
//! - derives income and growth multipliers from the county set
//!   ([`WeightingFactors`]),
//! - imputes a residents-per-establishment ratio for counties without any
//!   establishments ([`percentile_cap`]), and
//! - rescales the weighted ratios into integer scores in `0..=100`
//!   ([`rescale_scores`]).
//!
//! Industries share nothing but the read-only inputs, so
//! [`score_catalog`] scores them in parallel when the `parallel` feature is
//! enabled.
//!
//! # Examples
//!
//! ```
//! use countyscope_core::{CountyRecord, Demographics, EstablishmentCounts, ScoringConfig};
//! use countyscope_scorer::score_industry;
//!
//! let establishments = EstablishmentCounts::from([("01001".to_owned(), 10)]);
//! let demographics = Demographics::from([(
//!     "01001".to_owned(),
//!     CountyRecord { population: 50_000, ..CountyRecord::default() },
//! )]);
//! let scores = score_industry("restaurants", &establishments, &demographics, &ScoringConfig::default());
//! assert_eq!(scores.get("01001").map(|county| county.score), Some(50));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::collections::BTreeMap;

use countyscope_core::{
    CountyCode, CountyRecord, CountyScore, Demographics, EstablishmentCounts,
    EstablishmentDataset, IndustryDefinition, ScoringConfig, StateTable,
};
use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod distribution;
mod entities;
mod imputer;
mod rescale;
mod types;

pub use distribution::{ValueRange, WeightingFactors};
pub use entities::{CountyUniverse, union_county_codes};
pub use imputer::{EMPTY_CAP, percentile_cap};
pub use rescale::{MAX_SCORE, MIDPOINT_SCORE, rescale_scores};
pub use types::{CoverageStatus, IndustryScores, RunSummary, ScoringRun};

static NO_ESTABLISHMENTS: EstablishmentCounts = BTreeMap::new();

/// Inputs for one county after the union step.
struct CountyInputs<'a> {
    code: CountyCode,
    record: Option<&'a CountyRecord>,
    establishments: u64,
}

impl CountyInputs<'_> {
    fn population(&self) -> u64 {
        self.record.map_or(0, |record| record.population)
    }

    fn median_income(&self) -> f64 {
        self.record.map_or(0.0_f64, |record| record.median_income)
    }

    fn population_growth(&self) -> f64 {
        self.record.map_or(0.0_f64, |record| record.population_growth)
    }

    fn observed_ratio(&self) -> Option<f64> {
        let population = self.population();
        (population > 0 && self.establishments > 0)
            .then(|| ratio(population, self.establishments))
    }

    fn state(&self, states: &StateTable) -> String {
        self.record
            .and_then(CountyRecord::state)
            .or_else(|| states.abbreviation(self.code.state_prefix()))
            .unwrap_or_default()
            .to_owned()
    }
}

/// A populated county with its raw score, awaiting rescaling.
struct RawCounty<'a> {
    inputs: CountyInputs<'a>,
    ratio: f64,
    raw: f64,
}

/// Score every county for one industry.
///
/// `establishments` holds the industry's counts; counties absent from it
/// have zero establishments. The result is empty, with a warning logged,
/// when no county survives filtering; this is never an error.
#[must_use]
pub fn score_industry(
    industry_id: &str,
    establishments: &EstablishmentCounts,
    demographics: &Demographics,
    config: &ScoringConfig,
) -> IndustryScores {
    if establishments.is_empty() && demographics.is_empty() {
        warn!("No data for industry {industry_id}; skipping");
        return IndustryScores::empty(industry_id.to_owned(), CoverageStatus::NoInputData, 0);
    }

    let universe = union_county_codes(establishments, demographics, config.states());
    if universe.dropped() > 0 {
        debug!(
            "Dropped {} invalid county codes for industry {industry_id}",
            universe.dropped()
        );
    }
    if universe.is_empty() {
        warn!("No valid county codes for industry {industry_id}");
        return IndustryScores::empty(
            industry_id.to_owned(),
            CoverageStatus::NoValidCounties,
            universe.dropped(),
        );
    }

    let counties: Vec<CountyInputs<'_>> = universe
        .codes()
        .map(|code| CountyInputs {
            code: code.clone(),
            record: demographics.get(code.as_str()),
            establishments: establishments.get(code.as_str()).copied().unwrap_or(0),
        })
        .collect();

    let factors = WeightingFactors::from_observations(
        counties
            .iter()
            .map(|county| (county.median_income(), county.population_growth())),
        config.weights(),
    );
    let cap = percentile_cap(
        counties.iter().filter_map(CountyInputs::observed_ratio).collect(),
        config.cap_percentile(),
    );

    let populated: Vec<RawCounty<'_>> = counties
        .into_iter()
        .filter(|county| county.population() > 0)
        .map(|county| weigh_county(county, &factors, cap))
        .collect();
    if populated.is_empty() {
        warn!("No counties with valid data for industry {industry_id}");
        return IndustryScores::empty(
            industry_id.to_owned(),
            CoverageStatus::NoPopulatedCounties,
            universe.dropped(),
        );
    }

    let raw: Vec<f64> = populated.iter().map(|county| county.raw).collect();
    let scores = populated
        .into_iter()
        .zip(rescale_scores(&raw))
        .map(|(county, score)| {
            let record = CountyScore {
                name: county
                    .inputs
                    .record
                    .map(|record| record.name.clone())
                    .unwrap_or_default(),
                state: county.inputs.state(config.states()),
                score,
                establishment_count: county.inputs.establishments,
                population_per_biz: round_ratio(county.ratio),
                code: county.inputs.code,
            };
            (record.code.clone(), record)
        })
        .collect();

    IndustryScores::new(
        industry_id.to_owned(),
        CoverageStatus::Scored,
        scores,
        universe.dropped(),
    )
}

/// Score every industry in `catalog` against the shared snapshots.
///
/// Industries missing from `establishments` are scored from demographics
/// alone, every county then taking the imputed cap. Results keep catalog
/// order regardless of how the work is scheduled.
#[must_use]
pub fn score_catalog(
    catalog: &[IndustryDefinition],
    establishments: &EstablishmentDataset,
    demographics: &Demographics,
    config: &ScoringConfig,
) -> ScoringRun {
    let score_one = |industry: &IndustryDefinition| {
        let counts = establishments
            .get(&industry.id)
            .unwrap_or(&NO_ESTABLISHMENTS);
        score_industry(&industry.id, counts, demographics, config)
    };

    #[cfg(feature = "parallel")]
    let industries = catalog.par_iter().map(score_one).collect();
    #[cfg(not(feature = "parallel"))]
    let industries = catalog.iter().map(score_one).collect();

    ScoringRun::new(industries)
}

#[expect(
    clippy::float_arithmetic,
    reason = "raw score multiplies the base ratio by both weighting factors"
)]
fn weigh_county<'a>(
    county: CountyInputs<'a>,
    factors: &WeightingFactors,
    cap: f64,
) -> RawCounty<'a> {
    let ratio = county.observed_ratio().unwrap_or(cap);
    let raw = ratio
        * factors.income_weight(county.median_income())
        * factors.growth_weight(county.population_growth());
    RawCounty {
        inputs: county,
        ratio,
        raw,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ratio of two counts; county-scale values are exact in f64"
)]
fn ratio(population: u64, establishments: u64) -> f64 {
    population as f64 / establishments as f64
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ratios are finite and non-negative; the cast saturates"
)]
fn round_ratio(ratio: f64) -> u64 {
    ratio.round_ties_even().max(0.0_f64) as u64
}

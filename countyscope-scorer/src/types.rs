//! Per-industry results and run-level summaries.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use countyscope_core::{CountyCode, CountyScore};

/// How much usable data an industry had.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageStatus {
    /// At least one county was scored.
    Scored,
    /// Neither snapshot had any entries for the industry.
    NoInputData,
    /// Every key was rejected by the county code filter.
    NoValidCounties,
    /// Valid counties existed but none had a positive population.
    NoPopulatedCounties,
}

impl CoverageStatus {
    /// Report whether the industry produced scores.
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Scored)
    }
}

/// Scores for one industry, keyed by county code.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryScores {
    industry_id: String,
    status: CoverageStatus,
    scores: BTreeMap<CountyCode, CountyScore>,
    dropped_codes: usize,
}

impl IndustryScores {
    pub(crate) const fn new(
        industry_id: String,
        status: CoverageStatus,
        scores: BTreeMap<CountyCode, CountyScore>,
        dropped_codes: usize,
    ) -> Self {
        Self {
            industry_id,
            status,
            scores,
            dropped_codes,
        }
    }

    pub(crate) const fn empty(
        industry_id: String,
        status: CoverageStatus,
        dropped_codes: usize,
    ) -> Self {
        Self::new(industry_id, status, BTreeMap::new(), dropped_codes)
    }

    /// Industry identifier from the catalog.
    #[must_use]
    pub fn industry_id(&self) -> &str {
        &self.industry_id
    }

    /// Coverage outcome for the industry.
    #[must_use]
    pub const fn status(&self) -> CoverageStatus {
        self.status
    }

    /// Return the score for a county, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&CountyScore> {
        self.scores.get(code)
    }

    /// Scores keyed by county code.
    #[must_use]
    pub const fn scores(&self) -> &BTreeMap<CountyCode, CountyScore> {
        &self.scores
    }

    /// Number of scored counties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether no county was scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Input keys rejected by the county code filter.
    #[must_use]
    pub const fn dropped_codes(&self) -> usize {
        self.dropped_codes
    }

    /// Consume the wrapper and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<CountyCode, CountyScore> {
        self.scores
    }
}

/// Results for every industry in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoringRun {
    industries: Vec<IndustryScores>,
}

impl ScoringRun {
    pub(crate) const fn new(industries: Vec<IndustryScores>) -> Self {
        Self { industries }
    }

    /// Borrow the per-industry results.
    #[must_use]
    pub fn industries(&self) -> &[IndustryScores] {
        &self.industries
    }

    /// Look up the result for one industry.
    #[must_use]
    pub fn industry(&self, industry_id: &str) -> Option<&IndustryScores> {
        self.industries
            .iter()
            .find(|scores| scores.industry_id() == industry_id)
    }

    /// Summarise the run for reporting.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            industries_scored: self
                .industries
                .iter()
                .filter(|scores| scores.status().is_scored())
                .count(),
            empty_industries: self
                .industries
                .iter()
                .filter(|scores| scores.is_empty())
                .map(|scores| scores.industry_id().to_owned())
                .collect(),
            counties_per_industry: self
                .industries
                .iter()
                .map(|scores| (scores.industry_id().to_owned(), scores.len()))
                .collect(),
        }
    }

    /// Consume the run and return the per-industry results.
    #[must_use]
    pub fn into_inner(self) -> Vec<IndustryScores> {
        self.industries
    }
}

/// Non-fatal completion report for a scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Industries that produced at least one county score.
    pub industries_scored: usize,
    /// Industries that produced an empty score set.
    pub empty_industries: Vec<String>,
    /// County counts per industry, in catalog order.
    pub counties_per_industry: Vec<(String, usize)>,
}

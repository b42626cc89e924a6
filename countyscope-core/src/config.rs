//! Scoring configuration passed explicitly into the engine.

use thiserror::Error;

use crate::StateTable;

const DEFAULT_INCOME_WEIGHT: f64 = 0.3_f64;
const DEFAULT_GROWTH_WEIGHT: f64 = 0.2_f64;
const DEFAULT_CAP_PERCENTILE: f64 = 0.95_f64;

/// Amplification applied by the income and growth factors.
///
/// A county at the top of the income distribution has its base ratio
/// multiplied by `1 + income`; likewise for growth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    income: f64,
    growth: f64,
}

impl ScoringWeights {
    /// Validate and construct weights.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidWeight`] when either weight is
    /// negative or not finite.
    pub fn new(income: f64, growth: f64) -> Result<Self, ScoringConfigError> {
        Self::check("income", income)?;
        Self::check("growth", growth)?;
        Ok(Self { income, growth })
    }

    /// Maximum extra weight contributed by median income.
    #[must_use]
    pub const fn income(self) -> f64 {
        self.income
    }

    /// Maximum extra weight contributed by population growth.
    #[must_use]
    pub const fn growth(self) -> f64 {
        self.growth
    }

    fn check(name: &'static str, value: f64) -> Result<(), ScoringConfigError> {
        if value.is_finite() && value >= 0.0_f64 {
            Ok(())
        } else {
            Err(ScoringConfigError::InvalidWeight { name, value })
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME_WEIGHT,
            growth: DEFAULT_GROWTH_WEIGHT,
        }
    }
}

/// Read-only inputs shared by every industry's scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    states: StateTable,
    weights: ScoringWeights,
    cap_percentile: f64,
}

impl ScoringConfig {
    /// Validate and construct a configuration.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidPercentile`] unless
    /// `cap_percentile` lies in `0.0..=1.0`.
    pub fn new(
        states: StateTable,
        weights: ScoringWeights,
        cap_percentile: f64,
    ) -> Result<Self, ScoringConfigError> {
        if !(0.0_f64..=1.0_f64).contains(&cap_percentile) {
            return Err(ScoringConfigError::InvalidPercentile {
                value: cap_percentile,
            });
        }
        Ok(Self {
            states,
            weights,
            cap_percentile,
        })
    }

    /// Recognised state prefixes.
    #[must_use]
    pub const fn states(&self) -> &StateTable {
        &self.states
    }

    /// Income and growth weights.
    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Percentile rank used to impute ratios for zero-establishment counties.
    #[must_use]
    pub const fn cap_percentile(&self) -> f64 {
        self.cap_percentile
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            states: StateTable::default(),
            weights: ScoringWeights::default(),
            cap_percentile: DEFAULT_CAP_PERCENTILE,
        }
    }
}

/// Errors raised while building a [`ScoringConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ScoringConfigError {
    /// A weight was negative, infinite or NaN.
    #[error("{name} weight must be a finite, non-negative number (got {value})")]
    InvalidWeight {
        /// Which weight was rejected.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The cap percentile was outside `0.0..=1.0`.
    #[error("cap percentile must be between 0.0 and 1.0 (got {value})")]
    InvalidPercentile {
        /// Rejected value.
        value: f64,
    },
}

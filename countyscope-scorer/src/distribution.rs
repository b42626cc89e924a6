//! Population-wide income and growth ranges used as weighting inputs.
#![forbid(unsafe_code)]

use countyscope_core::ScoringWeights;

/// Minimum and width of a value series.
///
/// An empty series defaults to `0..1`. A zero-width series uses a width of
/// `1`, so every member normalises to `0` rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    range: f64,
}

impl ValueRange {
    /// Collect the minimum and width of `values`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "range width is the difference between extremes"
    )]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let extremes = values.into_iter().fold(None, |acc: Option<(f64, f64)>, value| {
            Some(acc.map_or((value, value), |(min, max)| (min.min(value), max.max(value))))
        });
        let (min, max) = extremes.unwrap_or((0.0_f64, 1.0_f64));
        let range = if max == min { 1.0_f64 } else { max - min };
        Self { min, range }
    }

    /// Smallest observed value.
    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    /// Width used as the normalisation denominator.
    #[must_use]
    pub const fn range(self) -> f64 {
        self.range
    }

    /// Position of `value` within the series.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max normalisation divides by the range width"
    )]
    pub fn normalise(self, value: f64) -> f64 {
        (value - self.min) / self.range
    }
}

/// Income and growth multipliers derived from one industry's county set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightingFactors {
    income: ValueRange,
    growth: ValueRange,
    weights: ScoringWeights,
}

impl WeightingFactors {
    /// Build factors from `(median_income, population_growth)` pairs.
    ///
    /// Only positive incomes enter the income series; every pair contributes
    /// its growth, including negative and zero growth.
    #[must_use]
    pub fn from_observations<I>(observations: I, weights: ScoringWeights) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut incomes = Vec::new();
        let mut growths = Vec::new();
        for (income, growth) in observations {
            if income > 0.0_f64 {
                incomes.push(income);
            }
            growths.push(growth);
        }
        Self {
            income: ValueRange::from_values(incomes),
            growth: ValueRange::from_values(growths),
            weights,
        }
    }

    /// Income series range.
    #[must_use]
    pub const fn income_range(&self) -> ValueRange {
        self.income
    }

    /// Growth series range.
    #[must_use]
    pub const fn growth_range(&self) -> ValueRange {
        self.growth
    }

    /// Multiplier in `1.0..=1.0 + income weight`.
    ///
    /// Unknown income (zero or below) contributes no incentive.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weight is an affine function of the normalised income"
    )]
    pub fn income_weight(&self, income: f64) -> f64 {
        let normalised = if income > 0.0_f64 {
            self.income.normalise(income)
        } else {
            0.0_f64
        };
        1.0_f64 + self.weights.income() * normalised
    }

    /// Multiplier in `1.0..=1.0 + growth weight`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "weight is an affine function of the normalised growth"
    )]
    pub fn growth_weight(&self, growth: f64) -> f64 {
        1.0_f64 + self.weights.growth() * self.growth.normalise(growth)
    }
}

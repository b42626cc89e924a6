//! Min-max rescaling of raw scores into the published `0..=100` range.
#![forbid(unsafe_code)]

/// Highest published score.
pub const MAX_SCORE: u8 = 100;

/// Score assigned to every county when all raw values tie.
pub const MIDPOINT_SCORE: u8 = 50;

/// Rescale raw scores so the minimum maps to `0` and the maximum to `100`.
///
/// Results are rounded half-to-even. When every value is identical,
/// including the single-value case, there is no ordering to express and each
/// county receives [`MIDPOINT_SCORE`]. Output order matches input order.
///
/// # Examples
/// ```
/// use countyscope_scorer::rescale_scores;
///
/// assert_eq!(rescale_scores(&[5.0, 50.0, 100.0]), vec![0, 47, 100]);
/// assert_eq!(rescale_scores(&[7.0, 7.0]), vec![50, 50]);
/// assert!(rescale_scores(&[]).is_empty());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "min-max scaling requires floating-point division"
)]
pub fn rescale_scores(raw: &[f64]) -> Vec<u8> {
    let Some(&first) = raw.first() else {
        return Vec::new();
    };
    let (min, max) = raw
        .iter()
        .fold((first, first), |(lo, hi), &value| (lo.min(value), hi.max(value)));
    if max == min {
        return vec![MIDPOINT_SCORE; raw.len()];
    }
    let span = max - min;
    raw.iter()
        .map(|value| to_score((value - min) / span * f64::from(MAX_SCORE)))
        .collect()
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=100 before the cast"
)]
fn to_score(scaled: f64) -> u8 {
    scaled
        .round_ties_even()
        .clamp(0.0_f64, f64::from(MAX_SCORE)) as u8
}

//! Ratio imputation for counties without establishments.
#![forbid(unsafe_code)]

/// Cap used when no county has both residents and establishments.
pub const EMPTY_CAP: f64 = 1.0_f64;

/// Value at the `percentile` rank of `ratios`.
///
/// The rank index is `floor(percentile × n)`, clamped to the last element of
/// the ascending sort. Zero-establishment counties receive this value as
/// their residents-per-establishment ratio, which pins them near, but never
/// above, the most extreme observed county.
///
/// # Examples
/// ```
/// use countyscope_scorer::percentile_cap;
///
/// let ratios: Vec<f64> = (1..=100).map(f64::from).collect();
/// assert_eq!(percentile_cap(ratios, 0.95), 96.0);
/// assert_eq!(percentile_cap(Vec::new(), 0.95), 1.0);
/// ```
#[must_use]
pub fn percentile_cap(mut ratios: Vec<f64>, percentile: f64) -> f64 {
    let Some(last) = ratios.len().checked_sub(1) else {
        return EMPTY_CAP;
    };
    ratios.sort_by(f64::total_cmp);
    let index = rank_index(ratios.len(), percentile).min(last);
    ratios.get(index).copied().unwrap_or(EMPTY_CAP)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "rank index truncates a non-negative product towards zero"
)]
fn rank_index(len: usize, percentile: f64) -> usize {
    (len as f64 * percentile).floor() as usize
}

use crate::analyzers::types::Ratio;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to 2 decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `numerator / denominator` rounded to 2 decimals, or
/// [`Ratio::NotComputable`] when the denominator is zero.
pub fn ratio(numerator: f64, denominator: f64) -> Ratio {
    if denominator == 0.0 {
        Ratio::NotComputable
    } else {
        Ratio::Computed(round2(numerator / denominator))
    }
}

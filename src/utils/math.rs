/// Standard normal CDF, `P(Z <= a)`.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / (2.0f64).sqrt()))
}

/// CDF of `N(mean, sd^2)` at `x`. `sd` must be positive.
#[inline]
pub fn normal_cdf(x: f64, mean: f64, sd: f64) -> f64 {
    normal_probability((x - mean) / sd)
}

/// Ratio that tolerates a zero denominator, returning `fallback` instead.
///
/// Meant for derived columns such as turnout or the winner's share, where an
/// empty precinct is expected. The estimators never route through this.
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 {
        fallback
    } else {
        numerator / denominator
    }
}

/// [`safe_divide`] with the usual fallback of `0.0`.
#[inline]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    safe_divide(numerator, denominator, 0.0)
}

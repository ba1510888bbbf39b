use crate::core::{Sample, StatsError};

/// Assigns every value of `sample` to one of `n_bins` equal-width buckets
/// spanning the sample's *own* `[min, max]`.
///
/// The result has one index per value, in input order. The maximum lands in
/// the last bucket (`n_bins - 1`), not one past it. Indices are positions
/// relative to this sample's range, so bucket `k` of two different samples
/// generally covers different absolute values.
pub fn bin(n_bins: usize, sample: &Sample) -> Result<Vec<usize>, StatsError> {
    sample.ensure_non_empty()?;
    if n_bins < 1 {
        return Err(StatsError::InvalidConfiguration(
            "n_bins must be >= 1".into(),
        ));
    }

    let lo = sample.min()?;
    let hi = sample.max()?;
    let range = hi - lo;
    if range == 0.0 {
        return Err(StatsError::DegenerateRange(lo));
    }

    let last = n_bins - 1;
    let n = n_bins as f64;
    // hi - lo overflows for extremes of opposite sign; halve before subtracting
    let position: fn(f64, f64, f64) -> f64 = if range.is_finite() {
        |x, lo, hi| (x - lo) / (hi - lo)
    } else {
        |x, lo, hi| (x * 0.5 - lo * 0.5) / (hi * 0.5 - lo * 0.5)
    };
    Ok(sample
        .values()
        .iter()
        .map(|&x| {
            let idx = (position(x, lo, hi) * n).floor() as usize;
            idx.min(last)
        })
        .collect())
}

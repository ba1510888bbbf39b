//! Moment-based summaries of a [`Sample`].
//!
//! `mean` and `variance` stream through the sample once with constant
//! memory; `skewness` makes a second pass over the standardized values.
//! Variance is the *population* variance (denominator `n`).

use crate::core::{Sample, StatsError};
use crate::statistics::estimators::{Estimator, MeanEstimator, VarianceEstimator};

pub fn mean(sample: &Sample) -> Result<f64, StatsError> {
    sample.ensure_non_empty()?;
    let mut est = MeanEstimator::default();
    est.extend(sample.values().iter().copied());
    Ok(est.estimation())
}

pub fn variance(sample: &Sample) -> Result<f64, StatsError> {
    sample.ensure_non_empty()?;
    let mut est = VarianceEstimator::default();
    est.extend(sample.values().iter().copied());
    Ok(est.estimation())
}

pub fn standard_deviation(sample: &Sample) -> Result<f64, StatsError> {
    variance(sample).map(f64::sqrt)
}

/// Third standardized moment, `mean(((x - mean) / sd)^3)`.
///
/// Fails with [`StatsError::DegenerateInput`] when every value is equal.
pub fn skewness(sample: &Sample) -> Result<f64, StatsError> {
    sample.ensure_non_empty()?;
    let mut moments = VarianceEstimator::default();
    moments.extend(sample.values().iter().copied());

    let mu = moments.mean();
    let sd = moments.estimation().sqrt();
    if sd == 0.0 {
        return Err(StatsError::DegenerateInput);
    }

    let mut third = MeanEstimator::default();
    third.extend(sample.values().iter().map(|&x| ((x - mu) / sd).powi(3)));
    Ok(third.estimation())
}

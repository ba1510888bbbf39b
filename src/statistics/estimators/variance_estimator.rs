use crate::statistics::estimators::Estimator;

/// Welford accumulator for the population variance (denominator `n`).
///
/// Single pass, constant memory, and free of the cancellation that the
/// `E[x^2] - E[x]^2` form suffers on large offsets.
#[derive(Debug, Default, Clone, Copy)]
pub struct VarianceEstimator {
    len: u64,
    mean: f64,
    m2: f64,
}

impl VarianceEstimator {
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.len > 0 { self.mean } else { f64::NAN }
    }
}

impl Estimator for VarianceEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        self.len += 1;
        let delta = v - self.mean;
        self.mean += delta / self.len as f64;
        self.m2 += delta * (v - self.mean);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            // m2 can dip a hair below zero from rounding on constant input
            (self.m2 / self.len as f64).max(0.0)
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_variance_of_textbook_sample() {
        let mut e = VarianceEstimator::default();
        e.extend([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((e.mean() - 5.0).abs() < 1e-12);
        assert!((e.estimation() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn stable_under_large_offset() {
        let mut e = VarianceEstimator::default();
        e.extend([1e9 + 4.0, 1e9 + 7.0, 1e9 + 13.0, 1e9 + 16.0]);
        assert!((e.estimation() - 22.5).abs() < 1e-6);
    }

    #[test]
    fn single_observation_has_zero_variance() {
        let mut e = VarianceEstimator::default();
        e.add(42.0);
        assert_eq!(e.estimation(), 0.0);
    }
}

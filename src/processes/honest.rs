use crate::core::StatsError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Unbounded stream of independent `N(mean, sd^2)` draws.
///
/// Restarting means building a new process: an OS-seeded instance gives a
/// fresh independent stream, a seeded one replays deterministically.
#[derive(Debug, Clone)]
pub struct HonestProcess {
    rng: StdRng,
    normal: Normal<f64>,
}

impl HonestProcess {
    pub fn new(mean: f64, sd: f64) -> Result<Self, StatsError> {
        Self::with_rng(mean, sd, StdRng::from_os_rng())
    }

    pub fn with_seed(mean: f64, sd: f64, seed: u64) -> Result<Self, StatsError> {
        Self::with_rng(mean, sd, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mean: f64, sd: f64, rng: StdRng) -> Result<Self, StatsError> {
        if !mean.is_finite() {
            return Err(StatsError::InvalidConfiguration(format!(
                "mean must be finite, got {mean}"
            )));
        }
        if !sd.is_finite() || sd < 0.0 {
            return Err(StatsError::InvalidConfiguration(format!(
                "standard deviation must be finite and >= 0, got {sd}"
            )));
        }
        let normal = Normal::new(mean, sd)
            .map_err(|e| StatsError::InvalidConfiguration(e.to_string()))?;
        Ok(Self { rng, normal })
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.normal.mean()
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }
}

impl Iterator for HonestProcess {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.normal.sample(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_same_prefix() {
        let a: Vec<f64> = HonestProcess::with_seed(0.0, 1.0, 7).unwrap().take(50).collect();
        let b: Vec<f64> = HonestProcess::with_seed(0.0, 1.0, 7).unwrap().take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn os_seeded_instances_are_independent() {
        let a: Vec<f64> = HonestProcess::new(0.0, 1.0).unwrap().take(20).collect();
        let b: Vec<f64> = HonestProcess::new(0.0, 1.0).unwrap().take(20).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_sd_yields_the_mean() {
        let p = HonestProcess::with_seed(950.0, 0.0, 1).unwrap();
        assert!(p.take(10).all(|x| x == 950.0));
    }

    #[test]
    fn rejects_invalid_parameters() {
        for (mean, sd) in [(0.0, -1.0), (0.0, f64::NAN), (f64::INFINITY, 1.0)] {
            assert!(matches!(
                HonestProcess::with_seed(mean, sd, 1),
                Err(StatsError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn exposes_its_parameters() {
        let p = HonestProcess::with_seed(1000.0, 30.0, 3).unwrap();
        assert_eq!(p.mean(), 1000.0);
        assert_eq!(p.std_dev(), 30.0);
    }
}

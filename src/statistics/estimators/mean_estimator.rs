use crate::statistics::estimators::Estimator;

/// Streaming mean estimator keeping a running mean instead of a sum.
///
/// Each step adds `v / len - mean / len`, so no intermediate exceeds the
/// magnitude of the inputs and large finite values never overflow.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanEstimator {
    len: u64,
    mean: f64,
}

impl Estimator for MeanEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        self.len += 1;
        let len = self.len as f64;
        self.mean += v / len - self.mean / len;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.mean
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.len
    }
}

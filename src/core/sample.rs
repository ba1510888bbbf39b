use crate::core::StatsError;
use serde::{Deserialize, Serialize};

/// Immutable, finite collection of observations.
///
/// Order is kept as supplied but carries no meaning for any estimator.
/// Values are expected to be finite: cleaning (dropping missing or
/// non-numeric rows) happens before a `Sample` is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    #[inline]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> Result<f64, StatsError> {
        self.values
            .iter()
            .copied()
            .reduce(f64::min)
            .ok_or(StatsError::EmptyInput)
    }

    pub fn max(&self) -> Result<f64, StatsError> {
        self.values
            .iter()
            .copied()
            .reduce(f64::max)
            .ok_or(StatsError::EmptyInput)
    }

    /// Fresh ascending copy; the sample itself is left untouched.
    pub fn sorted(&self) -> Vec<f64> {
        let mut out = self.values.clone();
        out.sort_by(|a, b| a.total_cmp(b));
        out
    }

    pub(crate) fn ensure_non_empty(&self) -> Result<(), StatsError> {
        if self.values.is_empty() {
            Err(StatsError::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Sample {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

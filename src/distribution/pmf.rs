use crate::core::StatsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bin index -> number of members. Bins with no members are absent.
pub type FrequencyMap = BTreeMap<usize, usize>;

pub fn frequencies(bin_indices: &[usize]) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for &b in bin_indices {
        *counts.entry(b).or_insert(0) += 1;
    }
    counts
}

/// Normalizes the frequency map of `bin_indices` into probabilities.
pub fn as_pmf(bin_indices: &[usize]) -> Result<Pmf, StatsError> {
    if bin_indices.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let total = bin_indices.len() as f64;
    let probabilities = frequencies(bin_indices)
        .into_iter()
        .map(|(b, count)| (b, count as f64 / total))
        .collect();
    Ok(Pmf { probabilities })
}

/// Probability mass function over bin indices.
///
/// Only occupied bins are stored; [`Pmf::probability`] reports `0.0` for the
/// rest. Values sum to one up to rounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pmf {
    probabilities: BTreeMap<usize, f64>,
}

impl Pmf {
    #[inline]
    pub fn probability(&self, bin: usize) -> f64 {
        self.probabilities.get(&bin).copied().unwrap_or(0.0)
    }

    /// Occupied bins in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.probabilities.iter().map(|(&b, &p)| (b, p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Most probable bin; the lowest index wins a tie.
    pub fn mode(&self) -> Option<usize> {
        self.iter()
            .fold(None, |best: Option<(usize, f64)>, (b, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((b, p)),
            })
            .map(|(b, _)| b)
    }

    /// Dense vector of `n_bins` probabilities, zero-filled for empty bins.
    /// Occupied bins at or past `n_bins` are dropped.
    pub fn to_dense(&self, n_bins: usize) -> Vec<f64> {
        let mut out = vec![0.0; n_bins];
        for (b, p) in self.iter().filter(|(b, _)| *b < n_bins) {
            out[b] = p;
        }
        out
    }
}

/// Position of `bin` on the 0..1 scale of its own sample's range.
#[inline]
pub fn relative_position(bin: usize, n_bins: usize) -> f64 {
    bin as f64 / n_bins as f64
}

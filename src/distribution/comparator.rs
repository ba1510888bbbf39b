use crate::core::{Sample, StatsError};
use crate::distribution::{Pmf, as_pmf, bin};
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::debug;

/// Shape profile of every labelled sample on its own relative scale.
///
/// Each sample is binned over its own `[min, max]` and normalized
/// independently, so bin `k` of every returned [`Pmf`] means "the `k / n_bins`
/// position of that sample's range". Profiles of datasets with different
/// magnitudes and record counts can then be overlaid directly. The first
/// failing sample aborts the comparison with its error.
pub fn compare<L>(
    samples: &BTreeMap<L, Sample>,
    n_bins: usize,
) -> Result<BTreeMap<L, Pmf>, StatsError>
where
    L: Ord + Clone + Display,
{
    samples
        .iter()
        .map(|(label, sample)| {
            let pmf = bin(n_bins, sample).and_then(|bins| as_pmf(&bins));
            match &pmf {
                Ok(p) => debug!(%label, n = sample.len(), occupied = p.len(), "profiled sample"),
                Err(e) => debug!(%label, error = %e, "sample cannot be profiled"),
            }
            pmf.map(|p| (label.clone(), p))
        })
        .collect()
}

//! Empirical cumulative distribution function.
//!
//! For a sample of n values, `F(x) = #{v <= x} / n`. The sample is frozen as
//! a sorted copy at build time and every query is a binary search over it,
//! so `F` can be evaluated at points the sample never contained (values from
//! another sample, or the grid of a theoretical distribution).

use crate::core::{Sample, StatsError};

pub fn build_ecdf(sample: &Sample) -> Result<Ecdf, StatsError> {
    sample.ensure_non_empty()?;
    Ok(Ecdf {
        values: sample.sorted(),
    })
}

/// Right-continuous step function built by [`build_ecdf`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ecdf {
    /// Sorted ascending, never empty.
    values: Vec<f64>,
}

impl Ecdf {
    /// Proportion of sample values `<= x`. O(log n).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.count_at_or_below(x) as f64 / self.values.len() as f64
    }

    /// Borrowing closure form of [`Ecdf::evaluate`].
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.evaluate(x)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The frozen sorted sample.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Largest vertical gap between this step function and `cdf`.
    ///
    /// Checked on both sides of every step, which is where the supremum of
    /// the gap is reached for a continuous `cdf`.
    pub fn max_distance<F: Fn(f64) -> f64>(&self, cdf: F) -> f64 {
        let n = self.values.len() as f64;
        let mut worst: f64 = 0.0;
        let mut below = 0usize;
        while below < self.values.len() {
            let x = self.values[below];
            let at_or_below = self.count_at_or_below(x);
            let theoretical = cdf(x);
            let left = below as f64 / n;
            let right = at_or_below as f64 / n;
            worst = worst
                .max((theoretical - left).abs())
                .max((theoretical - right).abs());
            below = at_or_below;
        }
        worst
    }

    #[inline]
    fn count_at_or_below(&self, x: f64) -> usize {
        self.values.partition_point(|&v| v <= x)
    }
}

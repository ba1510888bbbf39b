//! Order-statistic estimators.
//!
//! [`quantile`] uses the nearest-rank rule on a sorted copy:
//! ```text
//! i = floor((n - 1) * q + 0.5), clamped to [0, n - 1]
//! ```
//! and never interpolates. [`median`] is a separate estimator that averages
//! the two middle elements of an even-sized sample, so `median(s)` and
//! `quantile(0.5, s)` may differ when `n` is even.

use crate::core::{Sample, StatsError};
use serde::{Deserialize, Serialize};

pub fn quantile(q: f64, sample: &Sample) -> Result<f64, StatsError> {
    validate_q(q)?;
    sample.ensure_non_empty()?;
    Ok(nearest_rank(q, &sample.sorted()))
}

pub fn median(sample: &Sample) -> Result<f64, StatsError> {
    sample.ensure_non_empty()?;
    let sorted = sample.sorted();
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Min, quartiles and max from the nearest-rank [`quantile`] rule.
///
/// Sorts once and reads all five ranks off the same copy.
pub fn five_number_summary(sample: &Sample) -> Result<FiveNumberSummary, StatsError> {
    sample.ensure_non_empty()?;
    let sorted = sample.sorted();
    Ok(FiveNumberSummary {
        min: nearest_rank(0.0, &sorted),
        q1: nearest_rank(0.25, &sorted),
        median: nearest_rank(0.5, &sorted),
        q3: nearest_rank(0.75, &sorted),
        max: nearest_rank(1.0, &sorted),
    })
}

#[inline]
fn validate_q(q: f64) -> Result<(), StatsError> {
    if (0.0..=1.0).contains(&q) {
        Ok(())
    } else {
        Err(StatsError::InvalidQuantile(q))
    }
}

/// `sorted` must be non-empty and ascending.
fn nearest_rank(q: f64, sorted: &[f64]) -> f64 {
    let last = sorted.len() - 1;
    let rank = ((last as f64) * q + 0.5).floor() as usize;
    sorted[rank.min(last)]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    #[inline]
    pub fn to_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }

    #[inline]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn s(values: &[f64]) -> Sample {
        Sample::from(values)
    }

    #[test]
    fn median_odd_takes_middle_element() {
        assert_eq!(median(&s(&[3.0, 1.0, 2.0])).unwrap(), 2.0);
    }

    #[test]
    fn median_even_averages_middle_pair() {
        assert_eq!(median(&s(&[4.0, 1.0, 3.0, 2.0])).unwrap(), 2.5);
    }

    #[test]
    fn quantile_half_and_median_disagree_on_even_sizes() {
        let xs = s(&[1.0, 2.0, 3.0, 4.0]);
        // (4 - 1) * 0.5 + 0.5 = 2.0 -> rank 2
        assert_eq!(quantile(0.5, &xs).unwrap(), 3.0);
        assert_eq!(median(&xs).unwrap(), 2.5);
    }

    #[test]
    fn quantile_endpoints_are_min_and_max() {
        let xs = s(&[9.0, -2.0, 4.0, 4.0, 11.5, 0.0]);
        assert_eq!(quantile(0.0, &xs).unwrap(), -2.0);
        assert_eq!(quantile(1.0, &xs).unwrap(), 11.5);
    }

    #[test]
    fn quantile_uses_nearest_rank_without_interpolation() {
        let xs: Sample = (1..=10).map(f64::from).collect();
        // (10 - 1) * 0.25 + 0.5 = 2.75 -> rank 2
        assert_eq!(quantile(0.25, &xs).unwrap(), 3.0);
        // (10 - 1) * 0.9 + 0.5 = 8.6 -> rank 8
        assert_eq!(quantile(0.9, &xs).unwrap(), 9.0);
    }

    #[test]
    fn quantile_rejects_out_of_range_q() {
        let xs = s(&[1.0, 2.0]);
        assert_eq!(quantile(-0.01, &xs), Err(StatsError::InvalidQuantile(-0.01)));
        assert_eq!(quantile(1.5, &xs), Err(StatsError::InvalidQuantile(1.5)));
        assert!(matches!(
            quantile(f64::NAN, &xs),
            Err(StatsError::InvalidQuantile(_))
        ));
    }

    #[test]
    fn q_is_validated_before_emptiness() {
        assert_eq!(
            quantile(2.0, &Sample::default()),
            Err(StatsError::InvalidQuantile(2.0))
        );
        assert_eq!(quantile(0.5, &Sample::default()), Err(StatsError::EmptyInput));
        assert_eq!(median(&Sample::default()), Err(StatsError::EmptyInput));
        assert_eq!(
            five_number_summary(&Sample::default()),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn five_number_summary_matches_quantile() {
        let xs: Sample = (0..=100).rev().map(f64::from).collect();
        let summary = five_number_summary(&xs).unwrap();
        let expected: Vec<f64> = [0.0, 0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|&q| quantile(q, &xs).unwrap())
            .collect();
        assert_eq!(summary.to_array().to_vec(), expected);
        assert_eq!(summary.to_array(), [0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(summary.iqr(), 50.0);
        assert_eq!(summary.range(), 100.0);
    }

    #[test]
    fn five_number_summary_uses_quantile_not_median() {
        let xs = s(&[1.0, 2.0, 3.0, 4.0]);
        let summary = five_number_summary(&xs).unwrap();
        assert_eq!(summary.median, 3.0);
    }

    #[test]
    fn single_value_sample() {
        let xs = s(&[5.0]);
        assert_eq!(quantile(0.3, &xs).unwrap(), 5.0);
        assert_eq!(median(&xs).unwrap(), 5.0);
        assert_eq!(five_number_summary(&xs).unwrap().to_array(), [5.0; 5]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn quantile_is_monotonic_in_q(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..60),
            a in 0.0_f64..=1.0,
            b in 0.0_f64..=1.0,
        ) {
            let xs = Sample::from(data);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(quantile(lo, &xs).unwrap() <= quantile(hi, &xs).unwrap());
        }

        #[test]
        fn median_lies_between_min_and_max(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..60)
        ) {
            let xs = Sample::from(data);
            let m = median(&xs).unwrap();
            prop_assert!(xs.min().unwrap() <= m && m <= xs.max().unwrap());
        }
    }
}

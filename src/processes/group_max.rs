use crate::core::StatsError;

/// Adaptor that reduces consecutive, non-overlapping groups of `group_size`
/// values to their maximum.
///
/// Pulls exactly `group_size` values per item. When the inner iterator runs
/// dry mid-group the incomplete group is discarded and iteration ends.
#[derive(Debug, Clone)]
pub struct GroupMax<I> {
    inner: I,
    group_size: usize,
}

impl<I> GroupMax<I>
where
    I: Iterator<Item = f64>,
{
    pub fn new(inner: I, group_size: usize) -> Result<Self, StatsError> {
        if group_size < 1 {
            return Err(StatsError::InvalidConfiguration(
                "group_size must be >= 1".into(),
            ));
        }
        Ok(Self { inner, group_size })
    }
}

impl<I> Iterator for GroupMax<I>
where
    I: Iterator<Item = f64>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let mut best = self.inner.next()?;
        for _ in 1..self.group_size {
            best = best.max(self.inner.next()?);
        }
        Some(best)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.inner.size_hint();
        (lo / self.group_size, hi.map(|h| h / self.group_size))
    }
}

/// `.group_max(n)` on any stream of `f64`.
pub trait GroupMaxExt: Iterator<Item = f64> + Sized {
    fn group_max(self, group_size: usize) -> Result<GroupMax<Self>, StatsError> {
        GroupMax::new(self, group_size)
    }
}

impl<I: Iterator<Item = f64>> GroupMaxExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_max_of_each_group() {
        let xs = vec![1.0, 5.0, 2.0, 7.0, 3.0, 4.0, 9.0, 0.0, 8.0];
        let out: Vec<f64> = xs.into_iter().group_max(3).unwrap().collect();
        assert_eq!(out, vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn drops_trailing_partial_group() {
        let out: Vec<f64> = (1..=7).map(f64::from).group_max(3).unwrap().collect();
        assert_eq!(out, vec![3.0, 6.0]);
    }

    #[test]
    fn group_of_one_is_identity() {
        let xs = vec![3.0, -1.0, 2.0];
        let out: Vec<f64> = xs.clone().into_iter().group_max(1).unwrap().collect();
        assert_eq!(out, xs);
    }

    #[test]
    fn zero_group_size_is_rejected() {
        assert!(matches!(
            std::iter::empty::<f64>().group_max(0),
            Err(StatsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn size_hint_counts_whole_groups() {
        let g = vec![0.0; 10].into_iter().group_max(4).unwrap();
        assert_eq!(g.size_hint(), (2, Some(2)));
    }
}

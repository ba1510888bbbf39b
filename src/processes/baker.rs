//! The honest and dishonest baker.
//!
//! An honest baker's loaves weigh `N(mean, sd^2)`. A dishonest baker bakes
//! lighter loaves but hands each customer the heaviest of `group_size`
//! loaves, so the weights the customer sees come from the maximum order
//! statistic: shifted up and skewed to the right.

use crate::core::StatsError;
use crate::processes::{GroupMax, GroupMaxExt, HonestProcess};
use tracing::debug;

pub const DEFAULT_GROUP_SIZE: usize = 13;

pub type DishonestProcess = GroupMax<HonestProcess>;

pub fn honest_process(mean: f64, sd: f64) -> Result<HonestProcess, StatsError> {
    debug!(mean, sd, "honest process");
    HonestProcess::new(mean, sd)
}

pub fn dishonest_process(
    mean: f64,
    sd: f64,
    group_size: usize,
) -> Result<DishonestProcess, StatsError> {
    debug!(mean, sd, group_size, "dishonest process");
    HonestProcess::new(mean, sd)?.group_max(group_size)
}

pub fn seeded_honest_process(mean: f64, sd: f64, seed: u64) -> Result<HonestProcess, StatsError> {
    debug!(mean, sd, seed, "honest process");
    HonestProcess::with_seed(mean, sd, seed)
}

pub fn seeded_dishonest_process(
    mean: f64,
    sd: f64,
    group_size: usize,
    seed: u64,
) -> Result<DishonestProcess, StatsError> {
    debug!(mean, sd, group_size, seed, "dishonest process");
    HonestProcess::with_seed(mean, sd, seed)?.group_max(group_size)
}

use crate::processes::DEFAULT_GROUP_SIZE;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> Option<u64> {
    Some(DEFAULT_SEED)
}

fn default_honest_mean() -> f64 {
    1000.0
}

fn default_dishonest_mean() -> f64 {
    950.0
}

fn default_std_dev() -> f64 {
    30.0
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HonestParameters {
    #[serde(default = "default_honest_mean")]
    #[schemars(title = "Mean", description = "Mean of the Gaussian draws")]
    pub mean: f64,

    #[serde(default = "default_std_dev")]
    #[schemars(
        title = "Standard Deviation",
        description = "Standard deviation of the Gaussian draws",
        range(min = 0.0)
    )]
    pub std_dev: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed; null draws from OS entropy")]
    pub seed: Option<u64>,
}

impl Default for HonestParameters {
    fn default() -> Self {
        Self {
            mean: default_honest_mean(),
            std_dev: default_std_dev(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DishonestParameters {
    #[serde(default = "default_dishonest_mean")]
    #[schemars(title = "Mean", description = "Mean of the underlying Gaussian draws")]
    pub mean: f64,

    #[serde(default = "default_std_dev")]
    #[schemars(
        title = "Standard Deviation",
        description = "Standard deviation of the underlying Gaussian draws",
        range(min = 0.0)
    )]
    pub std_dev: f64,

    #[serde(default = "default_group_size")]
    #[schemars(
        title = "Group Size",
        description = "Draws per emitted value; the maximum of each group is kept",
        range(min = 1)
    )]
    pub group_size: usize,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed; null draws from OS entropy")]
    pub seed: Option<u64>,
}

impl Default for DishonestParameters {
    fn default() -> Self {
        Self {
            mean: default_dishonest_mean(),
            std_dev: default_std_dev(),
            group_size: default_group_size(),
            seed: default_seed(),
        }
    }
}

/// Closed set of simulated sources, tagged as `{"type": ..., "params": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ProcessKind))]
#[strum_discriminants(derive(EnumIter, Display, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ProcessChoice {
    #[strum_discriminants(strum(
        message = "Honest Baker",
        detailed_message = "Independent Gaussian draws with the given mean and standard deviation."
    ))]
    Honest(HonestParameters),

    #[strum_discriminants(strum(
        message = "Dishonest Baker",
        detailed_message = "Maximum of each group of Gaussian draws; shifted up and right-skewed."
    ))]
    Dishonest(DishonestParameters),
}

impl ProcessChoice {
    #[inline]
    pub fn kind(&self) -> ProcessKind {
        ProcessKind::from(self)
    }

    pub fn default_for(kind: ProcessKind) -> Self {
        match kind {
            ProcessKind::Honest => ProcessChoice::Honest(HonestParameters::default()),
            ProcessKind::Dishonest => ProcessChoice::Dishonest(DishonestParameters::default()),
        }
    }
}

/// One line per process kind: config tag, title and description.
pub fn describe_kinds() -> String {
    ProcessKind::iter()
        .map(|kind| {
            format!(
                "{:<10} {}: {}",
                kind.to_string(),
                kind.get_message().unwrap_or_default(),
                kind.get_detailed_message().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

use crate::config::{
    DishonestParameters, ExperimentConfig, HonestParameters, ProcessChoice,
};
use std::collections::BTreeMap;

/// Seeded honest (1000 ± 30) and dishonest (950 ± 30, groups of 13) bakers.
pub fn small_experiment(draws: usize, n_bins: usize) -> ExperimentConfig {
    let mut processes = BTreeMap::new();
    processes.insert(
        "honest".to_string(),
        ProcessChoice::Honest(HonestParameters {
            seed: Some(7),
            ..HonestParameters::default()
        }),
    );
    processes.insert(
        "dishonest".to_string(),
        ProcessChoice::Dishonest(DishonestParameters {
            seed: Some(8),
            ..DishonestParameters::default()
        }),
    );
    ExperimentConfig {
        draws,
        n_bins,
        processes,
    }
}

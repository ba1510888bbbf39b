mod baker_experiment;

pub use baker_experiment::{BakerExperiment, ExperimentReport, ProcessReport};

pub mod fixtures;

pub use fixtures::small_experiment;

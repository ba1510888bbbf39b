mod build;
mod error;
mod experiment_config;
mod process_choice;

pub use build::{BoxedProcess, build_process};
pub use error::BuildError;
pub use experiment_config::ExperimentConfig;
pub use process_choice::{
    DishonestParameters, HonestParameters, ProcessChoice, ProcessKind, describe_kinds,
};

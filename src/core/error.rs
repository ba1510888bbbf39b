use thiserror::Error;

/// Input-validation failures raised by the estimators.
///
/// Every variant is deterministic: retrying with the same input fails again,
/// and no estimator silently drops values to recover.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("empty input: at least one value is required")]
    EmptyInput,

    #[error("invalid quantile {0}: must be in [0, 1]")]
    InvalidQuantile(f64),

    #[error("degenerate range: every value equals {0}, no equal-width partition exists")]
    DegenerateRange(f64),

    #[error("degenerate input: standard deviation is zero")]
    DegenerateInput,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

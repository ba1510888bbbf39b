mod descriptive;
pub mod estimators;
mod quantile;

pub use descriptive::{mean, skewness, standard_deviation, variance};
pub use quantile::{FiveNumberSummary, five_number_summary, median, quantile};

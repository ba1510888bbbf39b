mod error;
mod sample;

pub use error::StatsError;
pub use sample::Sample;

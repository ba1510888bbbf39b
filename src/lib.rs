pub mod config;
pub mod core;
pub mod distribution;
pub mod processes;
pub mod statistics;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

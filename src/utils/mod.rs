pub mod math;

pub use math::{normal_cdf, safe_divide, safe_ratio};

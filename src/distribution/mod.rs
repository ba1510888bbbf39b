mod binner;
mod comparator;
mod ecdf;
mod pmf;

pub use binner::bin;
pub use comparator::compare;
pub use ecdf::{Ecdf, build_ecdf};
pub use pmf::{FrequencyMap, Pmf, as_pmf, frequencies, relative_position};

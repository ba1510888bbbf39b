mod estimator;
mod mean_estimator;
mod variance_estimator;

pub use estimator::Estimator;
pub use mean_estimator::MeanEstimator;
pub use variance_estimator::VarianceEstimator;

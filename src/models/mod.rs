//! Regression model and evaluation metrics.

pub mod gbt;
pub mod metrics;

pub use gbt::GradientBoostedRegressor;
pub use metrics::r2_score;

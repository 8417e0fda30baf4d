//! NYC taxi trip duration prediction pipeline.

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod models;
pub mod pipeline;
pub mod preprocessing;
pub mod types;

pub use config::Params;
pub use dataset::Frame;
pub use error::{PipelineError, Result};
pub use models::GradientBoostedRegressor;
pub use pipeline::Stage;
pub use preprocessing::{ColumnPreprocessor, OutlierBounds, PowerTransformer};
pub use types::{PredictionRequest, TripRecord};

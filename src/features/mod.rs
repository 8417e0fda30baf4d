//! Feature engineering: distances, calendar decomposition and the input /
//! target modifications feeding them.

pub mod build;
pub mod datetime;
pub mod distances;
pub mod modify;

pub use build::{build_features, implement_distances, DISTANCE_FEATURES};
pub use datetime::{decompose_timestamp, DatetimeFeatures};
pub use distances::{euclidean_distance, haversine_distance, manhattan_distance};
pub use modify::{
    drop_above_two_hundred_minutes, input_modifications, target_modifications, TARGET_COLUMN,
};

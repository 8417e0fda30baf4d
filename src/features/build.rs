//! Distance feature building.

use crate::dataset::Frame;
use crate::error::Result;
use crate::features::distances::{
    elementwise, euclidean_distance, haversine_distance, manhattan_distance,
};

pub const DISTANCE_FEATURES: [&str; 3] = [
    "haversine_distance",
    "euclidean_distance",
    "manhattan_distance",
];

/// Appends the three distance columns, computed row-wise from the pickup and
/// dropoff coordinate columns. The input frame is not mutated.
pub fn implement_distances(
    frame: &Frame,
    lat1: &str,
    lon1: &str,
    lat2: &str,
    lon2: &str,
) -> Result<Frame> {
    let lat1 = frame.column(lat1)?;
    let lon1 = frame.column(lon1)?;
    let lat2 = frame.column(lat2)?;
    let lon2 = frame.column(lon2)?;

    let functions: [fn(f64, f64, f64, f64) -> f64; 3] =
        [haversine_distance, euclidean_distance, manhattan_distance];

    let mut out = frame.clone();
    for (name, f) in DISTANCE_FEATURES.iter().zip(functions) {
        out.push_column(*name, elementwise(f, lat1, lon1, lat2, lon2))?;
    }
    Ok(out)
}

/// The pipeline's concrete column choice: pickup → dropoff coordinates.
pub fn build_features(frame: &Frame) -> Result<Frame> {
    implement_distances(
        frame,
        "pickup_latitude",
        "pickup_longitude",
        "dropoff_latitude",
        "dropoff_longitude",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_three_columns_without_mutating_input() {
        let frame = Frame::from_columns([
            ("pickup_latitude", vec![0.0, 0.0]),
            ("pickup_longitude", vec![0.0, 0.0]),
            ("dropoff_latitude", vec![0.0, 3.0]),
            ("dropoff_longitude", vec![1.0, 4.0]),
        ])
        .unwrap();

        let out = build_features(&frame).unwrap();
        assert_eq!(frame.n_cols(), 4);
        assert_eq!(out.n_cols(), 7);

        let haversine = out.column("haversine_distance").unwrap();
        assert!((haversine[0] - 111.19).abs() < 0.01);
        assert_eq!(out.column("euclidean_distance").unwrap()[1], 5.0);
        assert_eq!(out.column("manhattan_distance").unwrap()[1], 7.0);
    }

    #[test]
    fn missing_coordinate_column_is_an_error() {
        let frame = Frame::from_columns([("pickup_latitude", vec![0.0])]).unwrap();
        assert!(build_features(&frame).is_err());
    }
}

//! Distance functions between two geographic points.
//!
//! Haversine is the great-circle distance in kilometers. Euclidean and
//! Manhattan treat latitude/longitude degrees as a flat Cartesian plane; that
//! approximation is deliberate and kept as the trained models expect it.
//! NaN inputs propagate, out-of-range coordinates are not rejected.

/// Mean Earth radius, km.
const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}

pub fn euclidean_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lon1 - lon2).powi(2)).sqrt()
}

pub fn manhattan_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    (lat1 - lat2).abs() + (lon1 - lon2).abs()
}

/// Applies a scalar distance function element-wise over coordinate slices.
/// The slices must have equal length.
pub fn elementwise(
    f: fn(f64, f64, f64, f64) -> f64,
    lat1: &[f64],
    lon1: &[f64],
    lat2: &[f64],
    lon2: &[f64],
) -> Vec<f64> {
    debug_assert!(lat1.len() == lon1.len() && lat1.len() == lat2.len() && lat1.len() == lon2.len());
    (0..lat1.len())
        .map(|i| f(lat1[i], lon1[i], lat2[i], lon2[i]))
        .collect()
}

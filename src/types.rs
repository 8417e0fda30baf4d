//! Wire and record types for the pipeline

use serde::{Deserialize, Serialize};

/// One raw trip row as it appears in the source CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: String,
    pub vendor_id: i32,
    pub pickup_datetime: String,
    /// Present in train/val data only; an empty CSV field maps to `None`.
    #[serde(default)]
    pub dropoff_datetime: Option<String>,
    pub passenger_count: i32,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub store_and_fwd_flag: String,
    /// Target, in seconds; absent in test data.
    #[serde(default)]
    pub trip_duration: Option<f64>,
}

/// Input for the `/predictions` endpoint: one fully engineered feature row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub vendor_id: i32,
    pub passenger_count: i32,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub pickup_hour: i32,
    pub pickup_date: i32,
    pub pickup_month: i32,
    pub pickup_day: i32,
    pub is_weekend: i32,
    pub haversine_distance: f64,
    pub euclidean_distance: f64,
    pub manhattan_distance: f64,
}

impl PredictionRequest {
    /// Column order must match the frames the preprocessor was fitted on.
    pub const COLUMNS: [&'static str; 14] = [
        "vendor_id",
        "passenger_count",
        "pickup_longitude",
        "pickup_latitude",
        "dropoff_longitude",
        "dropoff_latitude",
        "pickup_hour",
        "pickup_date",
        "pickup_month",
        "pickup_day",
        "is_weekend",
        "haversine_distance",
        "euclidean_distance",
        "manhattan_distance",
    ];

    pub fn values(&self) -> [f64; 14] {
        [
            self.vendor_id as f64,
            self.passenger_count as f64,
            self.pickup_longitude,
            self.pickup_latitude,
            self.dropoff_longitude,
            self.dropoff_latitude,
            self.pickup_hour as f64,
            self.pickup_date as f64,
            self.pickup_month as f64,
            self.pickup_day as f64,
            self.is_weekend as f64,
            self.haversine_distance,
            self.euclidean_distance,
            self.manhattan_distance,
        ]
    }
}

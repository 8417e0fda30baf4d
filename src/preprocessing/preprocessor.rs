//! Column preprocessor assembly.
//!
//! One-hot on the vendor id, min-max on the coordinates, standard score on
//! the distances, remainder passthrough. Fitted once on training data and
//! reused unmodified for validation/test, so nothing leaks from those splits.

use serde::{Deserialize, Serialize};

use crate::dataset::Frame;
use crate::error::Result;
use crate::preprocessing::encoding::OneHotEncoder;
use crate::preprocessing::scaling::{MinMaxScaler, StandardScaler};

pub const ONE_HOT_COLUMNS: [&str; 1] = ["vendor_id"];

pub const MIN_MAX_COLUMNS: [&str; 4] = [
    "pickup_longitude",
    "pickup_latitude",
    "dropoff_longitude",
    "dropoff_latitude",
];

pub const STANDARD_SCALE_COLUMNS: [&str; 3] = [
    "haversine_distance",
    "euclidean_distance",
    "manhattan_distance",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnPreprocessor {
    one_hot: Vec<OneHotEncoder>,
    min_max: Vec<(String, MinMaxScaler)>,
    standard: Vec<(String, StandardScaler)>,
    /// Columns outside every group, in fit-time frame order.
    passthrough: Vec<String>,
}

impl ColumnPreprocessor {
    pub fn fit(frame: &Frame) -> Result<Self> {
        let mut one_hot = Vec::new();
        for name in ONE_HOT_COLUMNS {
            one_hot.push(OneHotEncoder::fit(name, frame.column(name)?)?);
        }

        let mut min_max = Vec::new();
        for name in MIN_MAX_COLUMNS {
            min_max.push((name.to_string(), MinMaxScaler::fit(frame.column(name)?)?));
        }

        let mut standard = Vec::new();
        for name in STANDARD_SCALE_COLUMNS {
            standard.push((name.to_string(), StandardScaler::fit(frame.column(name)?)?));
        }

        let grouped = |name: &str| {
            ONE_HOT_COLUMNS.contains(&name)
                || MIN_MAX_COLUMNS.contains(&name)
                || STANDARD_SCALE_COLUMNS.contains(&name)
        };
        let passthrough = frame
            .column_names()
            .filter(|&name| !grouped(name))
            .map(String::from)
            .collect();

        tracing::info!("column preprocessor fitted on {} columns", frame.n_cols());
        Ok(Self {
            one_hot,
            min_max,
            standard,
            passthrough,
        })
    }

    /// Output column order: encoded, min-max scaled, standard scaled, then
    /// the passthrough remainder.
    pub fn transform(&self, frame: &Frame) -> Result<Frame> {
        let mut out = Frame::new();
        for encoder in &self.one_hot {
            for (name, values) in encoder.transform(frame.column(encoder.column())?) {
                out.push_column(name, values)?;
            }
        }
        for (name, scaler) in &self.min_max {
            out.push_column(name.clone(), scaler.transform(frame.column(name)?))?;
        }
        for (name, scaler) in &self.standard {
            out.push_column(name.clone(), scaler.transform(frame.column(name)?))?;
        }
        for name in &self.passthrough {
            out.push_column(name.clone(), frame.column(name)?.to_vec())?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training_frame() -> Frame {
        Frame::from_columns([
            ("vendor_id", vec![1.0, 2.0, 1.0, 2.0]),
            ("passenger_count", vec![1.0, 2.0, 3.0, 4.0]),
            ("pickup_longitude", vec![-74.0, -73.9, -73.8, -74.1]),
            ("pickup_latitude", vec![40.7, 40.8, 40.6, 40.75]),
            ("dropoff_longitude", vec![-73.9, -74.0, -73.95, -73.85]),
            ("dropoff_latitude", vec![40.6, 40.7, 40.72, 40.68]),
            ("haversine_distance", vec![2.0, 5.0, 1.0, 8.0]),
            ("euclidean_distance", vec![0.02, 0.05, 0.01, 0.08]),
            ("manhattan_distance", vec![0.03, 0.07, 0.015, 0.1]),
        ])
        .unwrap()
    }

    #[test]
    fn output_column_order_is_stable() {
        let frame = training_frame();
        let preprocessor = ColumnPreprocessor::fit(&frame).unwrap();
        let out = preprocessor.transform(&frame).unwrap();
        let names: Vec<&str> = out.column_names().collect();
        assert_eq!(
            names,
            vec![
                "vendor_id_2",
                "pickup_longitude",
                "pickup_latitude",
                "dropoff_longitude",
                "dropoff_latitude",
                "haversine_distance",
                "euclidean_distance",
                "manhattan_distance",
                "passenger_count",
            ]
        );
    }

    #[test]
    fn scaled_coordinates_lie_in_unit_interval_on_train() {
        let frame = training_frame();
        let preprocessor = ColumnPreprocessor::fit(&frame).unwrap();
        let out = preprocessor.transform(&frame).unwrap();
        for name in MIN_MAX_COLUMNS {
            for &v in out.column(name).unwrap() {
                assert!((0.0..=1.0).contains(&v), "{name} = {v}");
            }
        }
    }

    #[test]
    fn unseen_vendor_id_transforms_without_error() {
        let frame = training_frame();
        let preprocessor = ColumnPreprocessor::fit(&frame).unwrap();

        let mut other = training_frame();
        other.push_column("vendor_id", vec![9.0, 9.0, 9.0, 9.0]).unwrap();
        let out = preprocessor.transform(&other).unwrap();
        assert_eq!(out.column("vendor_id_2").unwrap(), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn fitted_preprocessor_is_reused_verbatim() {
        let frame = training_frame();
        let preprocessor = ColumnPreprocessor::fit(&frame).unwrap();
        let out_train = preprocessor.transform(&frame).unwrap();

        // a shifted validation frame must be scaled with train statistics
        let mut val = training_frame();
        val.push_column("haversine_distance", vec![20.0, 50.0, 10.0, 80.0])
            .unwrap();
        let out_val = preprocessor.transform(&val).unwrap();
        assert_ne!(
            out_train.column("haversine_distance").unwrap(),
            out_val.column("haversine_distance").unwrap()
        );
    }

    #[test]
    fn missing_group_column_is_an_error() {
        let frame = training_frame();
        let preprocessor = ColumnPreprocessor::fit(&frame).unwrap();
        let mut broken = training_frame();
        broken.drop_column("haversine_distance").unwrap();
        assert!(preprocessor.transform(&broken).is_err());
    }
}

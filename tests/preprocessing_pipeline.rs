//! End-to-end run of the pipeline stages over a synthetic dataset: modify →
//! build features → preprocess (fit on train, reuse on val) → train → score.

use std::path::Path;

use trip_duration_ml::config::{ModelParams, Params};
use trip_duration_ml::dataset::{write_trips, Frame};
use trip_duration_ml::features::TARGET_COLUMN;
use trip_duration_ml::pipeline::{
    run_build_features, run_modify_features, run_predict, run_preprocess, run_train, Stage,
};
use trip_duration_ml::types::TripRecord;

fn synthetic_trips(n: usize) -> Vec<TripRecord> {
    (0..n)
        .map(|i| {
            let offset = (i % 40) as f64 * 0.002;
            TripRecord {
                id: format!("id{i}"),
                vendor_id: (i % 2 + 1) as i32,
                pickup_datetime: format!("2016-01-{:02} {:02}:30:00", i % 28 + 1, i % 24),
                dropoff_datetime: None,
                passenger_count: (i % 6 + 1) as i32,
                pickup_longitude: -73.98,
                pickup_latitude: 40.75,
                dropoff_longitude: -73.98 + offset,
                dropoff_latitude: 40.75 + offset / 2.0,
                store_and_fwd_flag: "N".to_string(),
                // duration grows with the trip offset, so distance predicts it
                trip_duration: Some(300.0 + (i % 40) as f64 * 25.0),
            }
        })
        .collect()
}

fn params() -> Params {
    Params {
        train_model: ModelParams {
            n_estimators: 30,
            learning_rate: 0.3,
            max_depth: 3,
            min_samples_leaf: 2,
        },
        ..Params::default()
    }
}

#[test]
fn full_pipeline_on_synthetic_data() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let raw = root.join("raw.csv");
    write_trips(&raw, &synthetic_trips(160)).unwrap();

    let modified = root.join("modified.csv");
    run_modify_features(Stage::Train, &raw, &modified).unwrap();

    let built = root.join("built.csv");
    run_build_features(&modified, &built).unwrap();

    let preprocessed = root.join("train_final.csv");
    run_preprocess(Stage::Train, &built, &preprocessed, root, &params()).unwrap();

    // the preprocessed frame carries the transformed target and the
    // engineered columns
    let frame = Frame::read_csv(&preprocessed).unwrap();
    assert!(frame.has_column(TARGET_COLUMN));
    assert!(frame.has_column("haversine_distance"));
    assert!(frame.has_column("vendor_id_2"));
    assert!(frame.n_rows() > 0);

    run_train(&preprocessed, root, &params()).unwrap();
    let score = run_predict(&preprocessed, root).unwrap();
    assert!(score > 0.5, "train r2 was {score}");
}

#[test]
fn validation_reuses_train_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let raw = root.join("raw.csv");
    write_trips(&raw, &synthetic_trips(160)).unwrap();
    let modified = root.join("modified.csv");
    run_modify_features(Stage::Train, &raw, &modified).unwrap();
    let built = root.join("built.csv");
    run_build_features(&modified, &built).unwrap();
    let train_out = root.join("train_final.csv");
    run_preprocess(Stage::Train, &built, &train_out, root, &params()).unwrap();

    // a shifted validation split goes through the fitted transformers
    let val_raw = root.join("val_raw.csv");
    write_trips(&val_raw, &synthetic_trips(60)).unwrap();
    let val_modified = root.join("val_modified.csv");
    run_modify_features(Stage::Validate, &val_raw, &val_modified).unwrap();
    let val_built = root.join("val_built.csv");
    run_build_features(&val_modified, &val_built).unwrap();
    let val_out = root.join("val_final.csv");
    run_preprocess(Stage::Validate, &val_built, &val_out, root, &params()).unwrap();

    let train_frame = Frame::read_csv(&train_out).unwrap();
    let val_frame = Frame::read_csv(&val_out).unwrap();
    let train_cols: Vec<&str> = train_frame.column_names().collect();
    let val_cols: Vec<&str> = val_frame.column_names().collect();
    assert_eq!(train_cols, val_cols);
}

#[test]
fn test_stage_has_no_target_and_needs_no_output_transformer() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    // fit artifacts on a training pass first
    let raw = root.join("raw.csv");
    write_trips(&raw, &synthetic_trips(160)).unwrap();
    let modified = root.join("modified.csv");
    run_modify_features(Stage::Train, &raw, &modified).unwrap();
    let built = root.join("built.csv");
    run_build_features(&modified, &built).unwrap();
    let train_out = root.join("train_final.csv");
    run_preprocess(Stage::Train, &built, &train_out, root, &params()).unwrap();

    // unlabeled test data
    let test_trips: Vec<TripRecord> = synthetic_trips(40)
        .into_iter()
        .map(|mut r| {
            r.trip_duration = None;
            r
        })
        .collect();
    let test_raw = root.join("test_raw.csv");
    write_trips(&test_raw, &test_trips).unwrap();
    let test_modified = root.join("test_modified.csv");
    run_modify_features(Stage::Test, &test_raw, &test_modified).unwrap();
    let test_built = root.join("test_built.csv");
    run_build_features(&test_modified, &test_built).unwrap();
    let test_out = root.join("test_final.csv");
    run_preprocess(Stage::Test, &test_built, &test_out, root, &params()).unwrap();

    let frame = Frame::read_csv(&test_out).unwrap();
    assert!(!frame.has_column(TARGET_COLUMN));
    assert!(frame.n_rows() > 0);
}

#[test]
fn missing_artifacts_fail_the_validate_stage() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let raw = root.join("raw.csv");
    write_trips(&raw, &synthetic_trips(60)).unwrap();
    let modified = root.join("modified.csv");
    run_modify_features(Stage::Validate, &raw, &modified).unwrap();
    let built = root.join("built.csv");
    run_build_features(&modified, &built).unwrap();

    let out = root.join("val_final.csv");
    assert!(run_preprocess(Stage::Validate, &built, &out, root, &params()).is_err());
}

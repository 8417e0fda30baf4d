//! Splits a raw CSV into train/val files under `data/interim/`.
//!
//! Usage: `make_dataset <raw.csv>`

use std::path::PathBuf;

use anyhow::Context;
use trip_duration_ml::dataset::{read_trips, train_val_split, write_trips};
use trip_duration_ml::Params;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: make_dataset <raw.csv>")?;

    let params = Params::read("params.yaml")?;
    let records = read_trips(&input)?;
    let (train, val) = train_val_split(
        records,
        params.make_dataset.test_size,
        params.make_dataset.random_state,
    );

    let interim = PathBuf::from("data/interim");
    std::fs::create_dir_all(&interim)?;
    write_trips(interim.join("train.csv"), &train)?;
    write_trips(interim.join("val.csv"), &val)?;
    Ok(())
}

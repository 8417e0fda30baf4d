//! Trains the regressor on a preprocessed training split.
//!
//! Usage: `train <train.csv>`

use std::path::{Path, PathBuf};

use anyhow::Context;
use trip_duration_ml::pipeline::run_train;
use trip_duration_ml::Params;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: train <train.csv>")?;

    let params = Params::read("params.yaml")?;
    run_train(&input, Path::new("."), &params)?;
    Ok(())
}

//! Outlier removal, column preprocessing and target transform for one split.
//! The train stage fits and saves the transformers; val/test load them.
//!
//! Usage: `preprocess <train|val|test> <input.csv> <output.csv>`

use std::path::{Path, PathBuf};

use anyhow::Context;
use trip_duration_ml::pipeline::{run_preprocess, Stage};
use trip_duration_ml::Params;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: preprocess <train|val|test> <input.csv> <output.csv>";
    let stage: Stage = args.next().context(usage)?.parse()?;
    let input = PathBuf::from(args.next().context(usage)?);
    let output = PathBuf::from(args.next().context(usage)?);

    let params = Params::read("params.yaml")?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    run_preprocess(stage, &input, &output, Path::new("."), &params)?;
    Ok(())
}

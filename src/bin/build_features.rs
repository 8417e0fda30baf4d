//! Appends the distance features to one split.
//!
//! Usage: `build_features <input.csv> <output.csv>`

use std::path::PathBuf;

use anyhow::Context;
use trip_duration_ml::pipeline::run_build_features;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: build_features <input.csv> <output.csv>";
    let input = PathBuf::from(args.next().context(usage)?);
    let output = PathBuf::from(args.next().context(usage)?);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    run_build_features(&input, &output)?;
    Ok(())
}

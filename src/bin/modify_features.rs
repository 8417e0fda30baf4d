//! Input and target modifications for one split.
//!
//! Usage: `modify_features <train|val|test> <input.csv> <output.csv>`

use std::path::PathBuf;

use anyhow::Context;
use trip_duration_ml::pipeline::{run_modify_features, Stage};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let usage = "usage: modify_features <train|val|test> <input.csv> <output.csv>";
    let stage: Stage = args.next().context(usage)?.parse()?;
    let input = PathBuf::from(args.next().context(usage)?);
    let output = PathBuf::from(args.next().context(usage)?);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    run_modify_features(stage, &input, &output)?;
    Ok(())
}

//! Scores the persisted model on preprocessed labeled splits.
//!
//! Usage: `predict <file.csv>...`

use std::path::{Path, PathBuf};

use anyhow::Context;
use trip_duration_ml::pipeline::run_predict;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let inputs: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if inputs.is_empty() {
        anyhow::bail!("usage: predict <file.csv>...");
    }

    for input in &inputs {
        let score = run_predict(input, Path::new("."))
            .with_context(|| format!("scoring {}", input.display()))?;
        println!("The score for dataset {} is {score}", input.display());
    }
    Ok(())
}

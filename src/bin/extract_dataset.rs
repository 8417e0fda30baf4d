//! Extracts the zipped raw dataset into `data/raw/extracted/`.

use std::path::PathBuf;

use trip_duration_ml::dataset::extract_zip_file;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw = PathBuf::from("data/raw");
    let output = raw.join("extracted");
    for name in ["train.zip", "test.zip"] {
        extract_zip_file(&raw.join("zipped").join(name), &output)?;
    }
    Ok(())
}

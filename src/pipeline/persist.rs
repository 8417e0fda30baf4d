//! JSON persistence of fitted artifacts.
//!
//! Path convention mirrors the training layout: transformers under
//! `models/transformers/`, the regressor under `models/models/`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub const OUTLIERS_FILE: &str = "outliers.json";
pub const PREPROCESSOR_FILE: &str = "preprocessor.json";
pub const OUTPUT_TRANSFORMER_FILE: &str = "output_transformer.json";
pub const MODEL_FILE: &str = "gbt.json";

pub fn transformer_path(root: &Path, file: &str) -> PathBuf {
    root.join("models").join("transformers").join(file)
}

pub fn model_path(root: &Path) -> PathBuf {
    root.join("models").join("models").join(MODEL_FILE)
}

pub fn save_artifact<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(value)?;
    std::fs::write(path, json)?;
    tracing::info!("artifact saved at {}", path.display());
    Ok(())
}

pub fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

//! `params.yaml` loading with documented defaults

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    pub make_dataset: SplitParams,
    pub data_preprocessing: PreprocessingParams,
    #[serde(default)]
    pub train_model: ModelParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitParams {
    pub test_size: f64,
    pub random_state: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessingParams {
    /// `[low, high]` quantile levels for the outlier bounds.
    pub percentiles: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    pub n_estimators: usize,
    pub learning_rate: f64,
    pub max_depth: usize,
    pub min_samples_leaf: usize,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            test_size: 0.25,
            random_state: None,
        }
    }
}

impl Default for PreprocessingParams {
    fn default() -> Self {
        Self {
            percentiles: [0.01, 0.99],
        }
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            learning_rate: 0.1,
            max_depth: 6,
            min_samples_leaf: 20,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            make_dataset: SplitParams::default(),
            data_preprocessing: PreprocessingParams::default(),
            train_model: ModelParams::default(),
        }
    }
}

impl Params {
    /// Reads the parameters file. A missing file is recovered locally with the
    /// documented defaults and a warning; a present but malformed file is an
    /// error.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let params: Params = serde_yaml::from_str(&text)?;
                tracing::info!("parameters file read from {}", path.display());
                Ok(params)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "parameters file {} not found, switching to default values",
                    path.display()
                );
                Ok(Params::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

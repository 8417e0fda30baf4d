//! Per-column scalers used by the column preprocessor.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Standard-score scaling: `(x - mean) / std`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: f64,
    std: f64,
}

impl StandardScaler {
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let mut std = variance.sqrt();
        // constant columns scale to zero instead of dividing by zero
        if std < 1e-10 {
            std = 1.0;
        }
        Ok(Self { mean, std })
    }

    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| (v - self.mean) / self.std).collect()
    }
}

/// Min-max scaling into `[0, 1]` on the fitted range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: f64,
    range: f64,
}

impl MinMaxScaler {
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut range = max - min;
        if range < 1e-10 {
            range = 1.0;
        }
        Ok(Self { min, range })
    }

    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| (v - self.min) / self.range).collect()
    }
}

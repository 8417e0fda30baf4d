//! One-hot encoding of a categorical numeric column.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Drop-first one-hot encoder. Categories are the distinct fitted values in
/// ascending order; the first becomes the reference level and gets no column.
/// Unknown values at transform time encode as all zeros rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoder {
    column: String,
    categories: Vec<f64>,
}

impl OneHotEncoder {
    pub fn fit(column: &str, values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }
        let mut categories = values.to_vec();
        categories.sort_by(|a, b| a.total_cmp(b));
        categories.dedup();
        Ok(Self {
            column: column.to_string(),
            categories,
        })
    }

    /// One `(name, indicator)` pair per non-reference category.
    pub fn transform(&self, values: &[f64]) -> Vec<(String, Vec<f64>)> {
        self.categories
            .iter()
            .skip(1)
            .map(|cat| {
                let name = format!("{}_{}", self.column, cat);
                let indicator = values
                    .iter()
                    .map(|v| if v == cat { 1.0 } else { 0.0 })
                    .collect();
                (name, indicator)
            })
            .collect()
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}

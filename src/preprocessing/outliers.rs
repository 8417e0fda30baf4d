//! Percentile-based outlier removal.
//!
//! `fit` learns per-column `(lower, upper)` quantile bounds on a reference
//! frame and returns them as an immutable value; `transform` filters any
//! frame against those bounds without refitting. Validation and test data are
//! always filtered with train-derived bounds.

use serde::{Deserialize, Serialize};

use crate::dataset::Frame;
use crate::error::{PipelineError, Result};

/// Inlier range for one column, immutable after fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub lower: f64,
    pub upper: f64,
}

/// The fitted state: `(column, bound)` pairs in fit order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierBounds {
    bounds: Vec<(String, Bound)>,
}

impl OutlierBounds {
    /// Computes the `[low, high]` quantiles of each named column over the
    /// reference frame. Fails if a named column is absent or empty.
    pub fn fit(reference: &Frame, percentiles: [f64; 2], columns: &[&str]) -> Result<Self> {
        let [low, high] = percentiles;
        let mut bounds = Vec::with_capacity(columns.len());
        for &name in columns {
            let values = reference.column(name)?;
            if values.is_empty() {
                return Err(PipelineError::EmptyDataset);
            }
            let mut sorted = values.to_vec();
            sorted.sort_by(|a, b| a.total_cmp(b));
            bounds.push((
                name.to_string(),
                Bound {
                    lower: quantile(&sorted, low),
                    upper: quantile(&sorted, high),
                },
            ));
        }
        tracing::info!("outlier bounds fitted for {} columns", bounds.len());
        Ok(Self { bounds })
    }

    /// Filters the frame column by column in fit order; a row survives only
    /// if it lies within every bound, inclusive on both ends. Idempotent once
    /// the row set has stabilized.
    pub fn transform(&self, frame: &Frame) -> Result<Frame> {
        let mut current = frame.clone();
        for (name, bound) in &self.bounds {
            let mask: Vec<bool> = current
                .column(name)?
                .iter()
                .map(|&v| v >= bound.lower && v <= bound.upper)
                .collect();
            current = current.filter(&mask);
        }
        tracing::info!(
            "outlier removal kept {} of {} rows",
            current.n_rows(),
            frame.n_rows()
        );
        Ok(current)
    }

    pub fn bounds(&self) -> &[(String, Bound)] {
        &self.bounds
    }
}

/// Linear-interpolation quantile over an already sorted slice, the same
/// method pandas uses by default.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;
    if idx + 1 < n {
        sorted[idx] + frac * (sorted[idx + 1] - sorted[idx])
    } else {
        sorted[n - 1]
    }
}

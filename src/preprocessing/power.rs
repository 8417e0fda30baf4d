//! Yeo-Johnson power transform for the regression target.
//!
//! Fit once on the training target (in minutes); the fitted transform maps
//! validation targets to the model's space and inverts predictions back to
//! minutes at serving time.

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

const LAMBDA_SEARCH_RANGE: (f64, f64) = (-5.0, 5.0);
const GOLDEN_RATIO: f64 = 0.618_033_988_749_894_8;

/// Fitted Yeo-Johnson transform, standardized to zero mean and unit variance
/// on the training data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerTransformer {
    lambda: f64,
    mean: f64,
    std: f64,
}

impl PowerTransformer {
    /// Picks the lambda maximizing the Yeo-Johnson log-likelihood by
    /// golden-section search, then records the mean/std of the transformed
    /// training values for standardization.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        let (mut a, mut b) = LAMBDA_SEARCH_RANGE;
        let mut x1 = b - GOLDEN_RATIO * (b - a);
        let mut x2 = a + GOLDEN_RATIO * (b - a);
        let mut f1 = log_likelihood(values, x1);
        let mut f2 = log_likelihood(values, x2);
        for _ in 0..100 {
            if f1 < f2 {
                a = x1;
                x1 = x2;
                f1 = f2;
                x2 = a + GOLDEN_RATIO * (b - a);
                f2 = log_likelihood(values, x2);
            } else {
                b = x2;
                x2 = x1;
                f2 = f1;
                x1 = b - GOLDEN_RATIO * (b - a);
                f1 = log_likelihood(values, x1);
            }
        }
        let lambda = (a + b) / 2.0;

        let transformed: Vec<f64> = values.iter().map(|&v| yeo_johnson(v, lambda)).collect();
        let n = transformed.len() as f64;
        let mean = transformed.iter().sum::<f64>() / n;
        let variance = transformed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let mut std = variance.sqrt();
        if std < 1e-10 {
            std = 1.0;
        }

        tracing::info!("power transform fitted, lambda = {lambda:.4}");
        Ok(Self { lambda, mean, std })
    }

    pub fn transform(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .map(|&v| (yeo_johnson(v, self.lambda) - self.mean) / self.std)
            .collect()
    }

    /// Maps model-space predictions back to the original units.
    pub fn inverse_transform(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .map(|&v| yeo_johnson_inverse(v * self.std + self.mean, self.lambda))
            .collect()
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

fn yeo_johnson(x: f64, lambda: f64) -> f64 {
    if x >= 0.0 {
        if lambda.abs() < 1e-10 {
            (x + 1.0).ln()
        } else {
            ((x + 1.0).powf(lambda) - 1.0) / lambda
        }
    } else if (lambda - 2.0).abs() < 1e-10 {
        -(-x + 1.0).ln()
    } else {
        -((-x + 1.0).powf(2.0 - lambda) - 1.0) / (2.0 - lambda)
    }
}

fn yeo_johnson_inverse(y: f64, lambda: f64) -> f64 {
    if y >= 0.0 {
        if lambda.abs() < 1e-10 {
            y.exp() - 1.0
        } else {
            (lambda * y + 1.0).powf(1.0 / lambda) - 1.0
        }
    } else if (lambda - 2.0).abs() < 1e-10 {
        1.0 - (-y).exp()
    } else {
        1.0 - (1.0 - (2.0 - lambda) * y).powf(1.0 / (2.0 - lambda))
    }
}

/// Profile log-likelihood of the Yeo-Johnson transform for a given lambda.
fn log_likelihood(values: &[f64], lambda: f64) -> f64 {
    let n = values.len() as f64;
    let transformed: Vec<f64> = values.iter().map(|&v| yeo_johnson(v, lambda)).collect();
    let mean = transformed.iter().sum::<f64>() / n;
    let variance = transformed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if variance <= 0.0 {
        return f64::NEG_INFINITY;
    }
    let jacobian: f64 = values
        .iter()
        .map(|&v| v.signum() * (v.abs() + 1.0).ln())
        .sum();
    -n / 2.0 * variance.ln() + (lambda - 1.0) * jacobian
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_standardizes_training_data() {
        let values: Vec<f64> = (1..=200).map(|i| (i as f64).powi(2) / 10.0).collect();
        let transformer = PowerTransformer::fit(&values).unwrap();
        let transformed = transformer.transform(&values);
        let mean: f64 = transformed.iter().sum::<f64>() / transformed.len() as f64;
        let var: f64 =
            transformed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / transformed.len() as f64;
        assert!(mean.abs() < 1e-8);
        assert!((var - 1.0).abs() < 1e-8);
    }

    #[test]
    fn inverse_round_trips() {
        let values: Vec<f64> = (1..=100).map(|i| 2.0 + (i as f64) * 1.7).collect();
        let transformer = PowerTransformer::fit(&values).unwrap();
        let transformed = transformer.transform(&values);
        let recovered = transformer.inverse_transform(&transformed);
        for (orig, rec) in values.iter().zip(&recovered) {
            assert!((orig - rec).abs() < 1e-6, "{orig} != {rec}");
        }
    }

    #[test]
    fn identity_lambda_round_trips_pointwise() {
        // lambda = 1 is the identity shift; exercise the raw functions
        for &x in &[-3.5, -1.0, 0.0, 0.5, 10.0] {
            for &lambda in &[-1.0, 0.0, 0.5, 1.0, 2.0, 3.0] {
                let y = yeo_johnson(x, lambda);
                let back = yeo_johnson_inverse(y, lambda);
                assert!((x - back).abs() < 1e-9, "x={x} lambda={lambda} back={back}");
            }
        }
    }

    #[test]
    fn skewed_data_gets_a_compressing_lambda() {
        // right-skewed positive data wants lambda < 1
        let values: Vec<f64> = (1..=500).map(|i| (i as f64 / 50.0).exp()).collect();
        let transformer = PowerTransformer::fit(&values).unwrap();
        assert!(transformer.lambda() < 1.0);
    }
}

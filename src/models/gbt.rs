//! Gradient-boosted regression trees.
//!
//! Squared-error boosting: each tree is fit to the residuals of the ensemble
//! so far and added with shrinkage. Trees are stored as flat node arrays so
//! the whole model serializes to JSON alongside the fitted transformers.

#![allow(non_snake_case)]

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::config::ModelParams;
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    fn fit(X: &Array2<f64>, residuals: &[f64], max_depth: usize, min_samples_leaf: usize) -> Self {
        let mut tree = RegressionTree { nodes: Vec::new() };
        let indices: Vec<usize> = (0..X.nrows()).collect();
        tree.grow(X, residuals, indices, max_depth, min_samples_leaf);
        tree
    }

    /// Grows a subtree over `indices` and returns its root node index.
    fn grow(
        &mut self,
        X: &Array2<f64>,
        residuals: &[f64],
        indices: Vec<usize>,
        depth: usize,
        min_samples_leaf: usize,
    ) -> usize {
        let mean = indices.iter().map(|&i| residuals[i]).sum::<f64>() / indices.len() as f64;

        let split = if depth == 0 || indices.len() < 2 * min_samples_leaf {
            None
        } else {
            best_split(X, residuals, &indices, min_samples_leaf)
        };

        match split {
            None => {
                self.nodes.push(Node::Leaf { value: mean });
                self.nodes.len() - 1
            }
            Some((feature, threshold)) => {
                let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
                    .into_iter()
                    .partition(|&i| X[[i, feature]] <= threshold);
                let left = self.grow(X, residuals, left_idx, depth - 1, min_samples_leaf);
                let right = self.grow(X, residuals, right_idx, depth - 1, min_samples_leaf);
                self.nodes.push(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                });
                self.nodes.len() - 1
            }
        }
    }

    /// The root is always the last node pushed.
    fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        let mut node = self.nodes.len() - 1;
        loop {
            match &self.nodes[node] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }
}

/// Best `(feature, threshold)` by squared-error reduction, or `None` when no
/// split satisfies the leaf-size constraint or improves on the parent.
fn best_split(
    X: &Array2<f64>,
    residuals: &[f64],
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<(usize, f64)> {
    let n = indices.len();
    let total_sum: f64 = indices.iter().map(|&i| residuals[i]).sum();
    let parent_score = total_sum * total_sum / n as f64;

    let mut best: Option<(usize, f64)> = None;
    let mut best_score = parent_score;

    for feature in 0..X.ncols() {
        let mut order: Vec<usize> = indices.to_vec();
        order.sort_by(|&a, &b| X[[a, feature]].total_cmp(&X[[b, feature]]));

        let mut left_sum = 0.0;
        for (pos, &i) in order.iter().enumerate().take(n - 1) {
            left_sum += residuals[i];
            let n_left = pos + 1;
            let n_right = n - n_left;
            if n_left < min_samples_leaf || n_right < min_samples_leaf {
                continue;
            }
            let here = X[[i, feature]];
            let next = X[[order[pos + 1], feature]];
            // cannot split between identical values
            if next <= here {
                continue;
            }
            let right_sum = total_sum - left_sum;
            let score =
                left_sum * left_sum / n_left as f64 + right_sum * right_sum / n_right as f64;
            if score > best_score + 1e-12 {
                best_score = score;
                best = Some((feature, (here + next) / 2.0));
            }
        }
    }
    best
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoostedRegressor {
    base_prediction: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl GradientBoostedRegressor {
    pub fn fit(X: &Array2<f64>, y: &[f64], params: &ModelParams) -> Result<Self> {
        if X.nrows() == 0 || X.nrows() != y.len() {
            return Err(PipelineError::EmptyDataset);
        }

        let base_prediction = y.iter().sum::<f64>() / y.len() as f64;
        let mut predictions = vec![base_prediction; y.len()];
        let mut trees = Vec::with_capacity(params.n_estimators);

        for round in 0..params.n_estimators {
            let residuals: Vec<f64> = y
                .iter()
                .zip(&predictions)
                .map(|(t, p)| t - p)
                .collect();
            let tree =
                RegressionTree::fit(X, &residuals, params.max_depth, params.min_samples_leaf);
            for (i, pred) in predictions.iter_mut().enumerate() {
                *pred += params.learning_rate * tree.predict_row(X.row(i));
            }
            trees.push(tree);

            if round % 20 == 0 {
                let mse: f64 = y
                    .iter()
                    .zip(&predictions)
                    .map(|(t, p)| (t - p).powi(2))
                    .sum::<f64>()
                    / y.len() as f64;
                tracing::debug!("boosting round {round}, train mse {mse:.6}");
            }
        }

        tracing::info!("trained {} trees, learning_rate {}", trees.len(), params.learning_rate);
        Ok(Self {
            base_prediction,
            learning_rate: params.learning_rate,
            trees,
        })
    }

    pub fn predict(&self, X: &Array2<f64>) -> Vec<f64> {
        (0..X.nrows())
            .map(|i| {
                let row = X.row(i);
                self.base_prediction
                    + self.learning_rate
                        * self
                            .trees
                            .iter()
                            .map(|tree| tree.predict_row(row))
                            .sum::<f64>()
            })
            .collect()
    }
}

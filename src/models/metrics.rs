//! Evaluation metrics.

/// Coefficient of determination. Returns 0 for a constant target with any
/// prediction error, matching the usual library convention.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    debug_assert_eq!(actual.len(), predicted.len());
    let n = actual.len() as f64;
    let mean = actual.iter().sum::<f64>() / n;
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        if ss_res == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_res / ss_tot
    }
}

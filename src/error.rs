//! Pipeline error taxonomy

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("column `{0}` not found in frame")]
    MissingColumn(String),

    #[error("empty dataset")]
    EmptyDataset,

    #[error("column `{column}` has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("outlier target values not removed from the data (max = {max:.2} minutes)")]
    TargetOutliers { max: f64 },

    #[error("non-numeric value `{value}` in column `{column}`")]
    NonNumeric { column: String, value: String },

    #[error("invalid stage `{0}`, expected one of: train, val, test")]
    InvalidStage(String),

    #[error("failed to parse pickup timestamp `{0}`")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

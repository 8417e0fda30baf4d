//! Stage drivers orchestrating the pipeline.
//!
//! Each driver is load → transform → persist for one stage; the stage is an
//! explicit [`Stage`] value passed on the command line, never inferred from a
//! filename. Fitted artifacts are created only by the `Train` stage;
//! `Validate` and `Test` reuse them verbatim.

pub mod persist;

use std::path::Path;
use std::str::FromStr;

use crate::config::Params;
use crate::dataset::{self, Frame};
use crate::error::{PipelineError, Result};
use crate::features::{self, TARGET_COLUMN};
use crate::models::{r2_score, GradientBoostedRegressor};
use crate::preprocessing::{ColumnPreprocessor, OutlierBounds, PowerTransformer};

/// Columns the outlier bounds are fitted on.
pub const OUTLIER_COLUMNS: [&str; 4] = [
    "pickup_latitude",
    "pickup_longitude",
    "dropoff_latitude",
    "dropoff_longitude",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Train,
    Validate,
    Test,
}

impl Stage {
    /// Train and validation data carry the target; test data does not.
    pub fn has_target(self) -> bool {
        !matches!(self, Stage::Test)
    }
}

impl FromStr for Stage {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "train" => Ok(Stage::Train),
            "val" => Ok(Stage::Validate),
            "test" => Ok(Stage::Test),
            other => Err(PipelineError::InvalidStage(other.to_string())),
        }
    }
}

/// Raw records → numeric frame with calendar features and, for labeled
/// stages, the minute-converted and capped target.
pub fn run_modify_features(stage: Stage, input: &Path, output: &Path) -> Result<()> {
    let records = dataset::read_trips(input)?;
    let frame = features::input_modifications(&records, stage.has_target())?;
    let frame = if stage.has_target() {
        features::target_modifications(frame)?
    } else {
        frame
    };
    frame.write_csv(output)?;
    tracing::info!("{} saved, {} rows", output.display(), frame.n_rows());
    Ok(())
}

/// Appends the three distance features.
pub fn run_build_features(input: &Path, output: &Path) -> Result<()> {
    let frame = Frame::read_csv(input)?;
    let frame = features::build_features(&frame)?;
    frame.write_csv(output)?;
    tracing::info!("{} saved, {} rows", output.display(), frame.n_rows());
    Ok(())
}

/// Outlier removal, column preprocessing and target transform for one split.
/// `root` anchors the artifact paths; the train stage fits and saves every
/// artifact, the other stages load them.
pub fn run_preprocess(
    stage: Stage,
    input: &Path,
    output: &Path,
    root: &Path,
    params: &Params,
) -> Result<()> {
    let frame = Frame::read_csv(input)?;

    let (bounds, preprocessor, output_transformer) = match stage {
        Stage::Train => {
            let bounds = OutlierBounds::fit(
                &frame,
                params.data_preprocessing.percentiles,
                &OUTLIER_COLUMNS,
            )?;
            persist::save_artifact(
                &persist::transformer_path(root, persist::OUTLIERS_FILE),
                &bounds,
            )?;

            // fit the remaining transformers on the filtered training data
            let mut features_only = bounds.transform(&frame)?;
            let target = features_only.take_column(TARGET_COLUMN)?;

            let preprocessor = ColumnPreprocessor::fit(&features_only)?;
            persist::save_artifact(
                &persist::transformer_path(root, persist::PREPROCESSOR_FILE),
                &preprocessor,
            )?;

            let output_transformer = PowerTransformer::fit(&target)?;
            persist::save_artifact(
                &persist::transformer_path(root, persist::OUTPUT_TRANSFORMER_FILE),
                &output_transformer,
            )?;

            (bounds, preprocessor, Some(output_transformer))
        }
        Stage::Validate | Stage::Test => {
            let bounds: OutlierBounds =
                persist::load_artifact(&persist::transformer_path(root, persist::OUTLIERS_FILE))?;
            let preprocessor: ColumnPreprocessor = persist::load_artifact(
                &persist::transformer_path(root, persist::PREPROCESSOR_FILE),
            )?;
            let output_transformer = if stage.has_target() {
                Some(persist::load_artifact::<PowerTransformer>(
                    &persist::transformer_path(root, persist::OUTPUT_TRANSFORMER_FILE),
                )?)
            } else {
                None
            };
            (bounds, preprocessor, output_transformer)
        }
    };

    let mut filtered = bounds.transform(&frame)?;
    let target = if stage.has_target() {
        Some(filtered.take_column(TARGET_COLUMN)?)
    } else {
        None
    };

    let mut transformed = preprocessor.transform(&filtered)?;
    if let (Some(target), Some(transformer)) = (target, output_transformer) {
        transformed.push_column(TARGET_COLUMN, transformer.transform(&target))?;
    }

    transformed.write_csv(output)?;
    tracing::info!("{} saved, {} rows", output.display(), transformed.n_rows());
    Ok(())
}

/// Fits the regressor on a preprocessed training split and persists it.
pub fn run_train(input: &Path, root: &Path, params: &Params) -> Result<()> {
    let mut frame = Frame::read_csv(input)?;
    let target = frame.take_column(TARGET_COLUMN)?;
    let matrix = frame.to_matrix();

    let model = GradientBoostedRegressor::fit(&matrix, &target, &params.train_model)?;
    persist::save_artifact(&persist::model_path(root), &model)?;
    Ok(())
}

/// Scores the persisted model on a preprocessed labeled split.
pub fn run_predict(input: &Path, root: &Path) -> Result<f64> {
    let mut frame = Frame::read_csv(input)?;
    let target = frame.take_column(TARGET_COLUMN)?;
    let matrix = frame.to_matrix();

    let model: GradientBoostedRegressor = persist::load_artifact(&persist::model_path(root))?;
    let predictions = model.predict(&matrix);
    let score = r2_score(&target, &predictions);
    tracing::info!("score for dataset {} is {score:.4}", input.display());
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_parses_cli_tokens() {
        assert_eq!("train".parse::<Stage>().unwrap(), Stage::Train);
        assert_eq!("val".parse::<Stage>().unwrap(), Stage::Validate);
        assert_eq!("test".parse::<Stage>().unwrap(), Stage::Test);
        assert!(matches!(
            "training".parse::<Stage>(),
            Err(PipelineError::InvalidStage(_))
        ));
    }

    #[test]
    fn only_test_stage_is_unlabeled() {
        assert!(Stage::Train.has_target());
        assert!(Stage::Validate.has_target());
        assert!(!Stage::Test.has_target());
    }
}

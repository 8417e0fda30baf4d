//! Data preprocessing: outlier removal, encoding, scaling, target transform.
//!
//! Every estimator here follows the same two-phase shape: `fit` is an
//! associated constructor returning an immutable fitted value, `transform`
//! borrows it and never mutates.

pub mod encoding;
pub mod outliers;
pub mod power;
pub mod preprocessor;
pub mod scaling;

pub use encoding::OneHotEncoder;
pub use outliers::{Bound, OutlierBounds};
pub use power::PowerTransformer;
pub use preprocessor::{
    ColumnPreprocessor, MIN_MAX_COLUMNS, ONE_HOT_COLUMNS, STANDARD_SCALE_COLUMNS,
};
pub use scaling::{MinMaxScaler, StandardScaler};

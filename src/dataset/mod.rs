//! Dataset handling: tabular frames, CSV io, raw-archive extraction and the
//! train/validation split.

pub mod extract;
pub mod frame;
pub mod split;

pub use extract::extract_zip_file;
pub use frame::Frame;
pub use split::train_val_split;

use std::path::Path;

use crate::error::Result;
use crate::types::TripRecord;

/// Reads raw trip records from a CSV file.
pub fn read_trips(path: impl AsRef<Path>) -> Result<Vec<TripRecord>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    tracing::info!(
        "{} read, {} rows",
        path.as_ref().display(),
        records.len()
    );
    Ok(records)
}

/// Writes raw trip records to a CSV file.
pub fn write_trips(path: impl AsRef<Path>, records: &[TripRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    tracing::info!(
        "{} saved, {} rows",
        path.as_ref().display(),
        records.len()
    );
    Ok(())
}

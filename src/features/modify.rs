//! Input and target modifications applied before feature building.
//!
//! Raw trip records become a numeric [`Frame`]: identifier, store-and-forward
//! flag and dropoff timestamp are dropped, rows with out-of-range passenger
//! counts are removed, and the pickup timestamp is decomposed into calendar
//! columns. Labeled data additionally gets its target converted to minutes
//! and capped at two hundred.

use crate::dataset::Frame;
use crate::error::{PipelineError, Result};
use crate::features::datetime::decompose_timestamp;
use crate::types::TripRecord;

pub const TARGET_COLUMN: &str = "trip_duration";

/// Inclusive passenger-count range kept in the data.
const PASSENGERS_TO_INCLUDE: std::ops::RangeInclusive<i32> = 1..=6;

/// Upper bound for the target, in minutes.
const MAX_TRIP_MINUTES: f64 = 200.0;

/// Turns raw records into the numeric feature frame. When `labeled` is set
/// the target column (still in seconds) is carried along and every record
/// must have one.
pub fn input_modifications(records: &[TripRecord], labeled: bool) -> Result<Frame> {
    let kept: Vec<&TripRecord> = records
        .iter()
        .filter(|r| PASSENGERS_TO_INCLUDE.contains(&r.passenger_count))
        .collect();
    tracing::info!(
        "passenger filter kept {} of {} rows",
        kept.len(),
        records.len()
    );

    let n = kept.len();
    let mut vendor_id = Vec::with_capacity(n);
    let mut passenger_count = Vec::with_capacity(n);
    let mut pickup_longitude = Vec::with_capacity(n);
    let mut pickup_latitude = Vec::with_capacity(n);
    let mut dropoff_longitude = Vec::with_capacity(n);
    let mut dropoff_latitude = Vec::with_capacity(n);
    let mut pickup_hour = Vec::with_capacity(n);
    let mut pickup_date = Vec::with_capacity(n);
    let mut pickup_month = Vec::with_capacity(n);
    let mut pickup_day = Vec::with_capacity(n);
    let mut is_weekend = Vec::with_capacity(n);
    let mut target = Vec::with_capacity(if labeled { n } else { 0 });

    for record in &kept {
        let dt = decompose_timestamp(&record.pickup_datetime)?;
        vendor_id.push(record.vendor_id as f64);
        passenger_count.push(record.passenger_count as f64);
        pickup_longitude.push(record.pickup_longitude);
        pickup_latitude.push(record.pickup_latitude);
        dropoff_longitude.push(record.dropoff_longitude);
        dropoff_latitude.push(record.dropoff_latitude);
        pickup_hour.push(dt.pickup_hour as f64);
        pickup_date.push(dt.pickup_date as f64);
        pickup_month.push(dt.pickup_month as f64);
        pickup_day.push(dt.pickup_day as f64);
        is_weekend.push(dt.is_weekend as f64);
        if labeled {
            let seconds = record
                .trip_duration
                .ok_or_else(|| PipelineError::MissingColumn(TARGET_COLUMN.to_string()))?;
            target.push(seconds);
        }
    }

    let mut frame = Frame::from_columns([
        ("vendor_id", vendor_id),
        ("passenger_count", passenger_count),
        ("pickup_longitude", pickup_longitude),
        ("pickup_latitude", pickup_latitude),
        ("dropoff_longitude", dropoff_longitude),
        ("dropoff_latitude", dropoff_latitude),
        ("pickup_hour", pickup_hour),
        ("pickup_date", pickup_date),
        ("pickup_month", pickup_month),
        ("pickup_day", pickup_day),
        ("is_weekend", is_weekend),
    ])?;
    if labeled {
        frame.push_column(TARGET_COLUMN, target)?;
    }
    Ok(frame)
}

/// Converts the target column from seconds into minutes, in place.
pub fn convert_target_to_minutes(frame: &mut Frame) -> Result<()> {
    let minutes: Vec<f64> = frame
        .column(TARGET_COLUMN)?
        .iter()
        .map(|s| s / 60.0)
        .collect();
    frame.push_column(TARGET_COLUMN, minutes)?;
    tracing::info!("target column converted from seconds into minutes");
    Ok(())
}

/// Removes rows whose target exceeds two hundred minutes and verifies the
/// postcondition on the filtered frame.
pub fn drop_above_two_hundred_minutes(frame: &Frame) -> Result<Frame> {
    let target = frame.column(TARGET_COLUMN)?;
    let mask: Vec<bool> = target.iter().map(|&v| v <= MAX_TRIP_MINUTES).collect();
    let filtered = frame.filter(&mask);

    let max = filtered
        .column(TARGET_COLUMN)?
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    tracing::info!(
        "max value in target column after transformation is {max}, state of transformation is {}",
        max <= MAX_TRIP_MINUTES
    );
    if max > MAX_TRIP_MINUTES {
        return Err(PipelineError::TargetOutliers { max });
    }
    Ok(filtered)
}

/// Both target steps in order: seconds → minutes, then the 200-minute cap.
pub fn target_modifications(mut frame: Frame) -> Result<Frame> {
    convert_target_to_minutes(&mut frame)?;
    drop_above_two_hundred_minutes(&frame)
}

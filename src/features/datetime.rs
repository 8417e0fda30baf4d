//! Pickup-timestamp decomposition.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::{PipelineError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Calendar features derived from one pickup timestamp. `pickup_day` is the
/// weekday index with Monday = 0, so `is_weekend` is set for indices 5 and 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatetimeFeatures {
    pub pickup_hour: u32,
    pub pickup_date: u32,
    pub pickup_month: u32,
    pub pickup_day: u32,
    pub is_weekend: u32,
}

pub fn decompose_timestamp(timestamp: &str) -> Result<DatetimeFeatures> {
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .map_err(|_| PipelineError::InvalidTimestamp(timestamp.to_string()))?;
    let weekday = parsed.weekday().num_days_from_monday();
    Ok(DatetimeFeatures {
        pickup_hour: parsed.hour(),
        pickup_date: parsed.day(),
        pickup_month: parsed.month(),
        pickup_day: weekday,
        is_weekend: u32::from(weekday >= 5),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturday_evening_decomposition() {
        // 2016-01-02 is a Saturday
        let features = decompose_timestamp("2016-01-02 23:00:00").unwrap();
        assert_eq!(features.pickup_hour, 23);
        assert_eq!(features.pickup_date, 2);
        assert_eq!(features.pickup_month, 1);
        assert_eq!(features.pickup_day, 5);
        assert_eq!(features.is_weekend, 1);
    }

    #[test]
    fn monday_is_index_zero_and_not_weekend() {
        // 2016-03-14 is a Monday
        let features = decompose_timestamp("2016-03-14 08:30:00").unwrap();
        assert_eq!(features.pickup_day, 0);
        assert_eq!(features.is_weekend, 0);
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        assert!(matches!(
            decompose_timestamp("02/01/2016 23:00"),
            Err(PipelineError::InvalidTimestamp(_))
        ));
    }
}

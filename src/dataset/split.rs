//! Train/validation split of raw trip records.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::TripRecord;

/// Shuffles the records and splits off `test_size` of them as the validation
/// set. `random_state` makes the shuffle reproducible; `None` seeds from
/// entropy, matching an unset seed in the parameters file.
pub fn train_val_split(
    mut records: Vec<TripRecord>,
    test_size: f64,
    random_state: Option<u64>,
) -> (Vec<TripRecord>, Vec<TripRecord>) {
    let mut rng = match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::thread_rng().gen()),
    };
    records.shuffle(&mut rng);

    let n_val = ((records.len() as f64) * test_size).round() as usize;
    let n_val = n_val.min(records.len());
    let val = records.split_off(records.len() - n_val);

    tracing::info!(
        "data split into train ({} rows) and val ({} rows), test_size={}, random_state={:?}",
        records.len(),
        val.len(),
        test_size,
        random_state
    );
    (records, val)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> TripRecord {
        TripRecord {
            id: id.to_string(),
            vendor_id: 1,
            pickup_datetime: "2016-01-02 23:00:00".to_string(),
            dropoff_datetime: None,
            passenger_count: 1,
            pickup_longitude: -73.98,
            pickup_latitude: 40.76,
            dropoff_longitude: -73.96,
            dropoff_latitude: 40.77,
            store_and_fwd_flag: "N".to_string(),
            trip_duration: Some(600.0),
        }
    }

    #[test]
    fn split_sizes_match_fraction() {
        let records: Vec<_> = (0..100).map(|i| record(&format!("id{i}"))).collect();
        let (train, val) = train_val_split(records, 0.25, Some(42));
        assert_eq!(train.len(), 75);
        assert_eq!(val.len(), 25);
    }

    #[test]
    fn seeded_split_is_reproducible() {
        let records: Vec<_> = (0..50).map(|i| record(&format!("id{i}"))).collect();
        let (train_a, val_a) = train_val_split(records.clone(), 0.2, Some(7));
        let (train_b, val_b) = train_val_split(records, 0.2, Some(7));
        let ids = |v: &[TripRecord]| v.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&train_a), ids(&train_b));
        assert_eq!(ids(&val_a), ids(&val_b));
    }

    #[test]
    fn split_partitions_all_records() {
        let records: Vec<_> = (0..33).map(|i| record(&format!("id{i}"))).collect();
        let (train, val) = train_val_split(records, 0.25, Some(1));
        assert_eq!(train.len() + val.len(), 33);
    }
}

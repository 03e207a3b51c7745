//! Prometheus metrics for repository operations

use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

use crate::errors::SongError;

lazy_static! {
    static ref SONG_OPERATIONS: IntCounterVec = register_int_counter_vec!(
        "songs_operations_total",
        "Song repository operations by outcome",
        &["operation", "outcome"]
    )
    .unwrap();
}

/// Count one repository operation against its outcome
pub fn record<T>(operation: &str, result: &Result<T, SongError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    SONG_OPERATIONS
        .with_label_values(&[operation, outcome])
        .inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_by_outcome() {
        let before = SONG_OPERATIONS
            .with_label_values(&["metrics_test", "not_found"])
            .get();

        let result: Result<(), SongError> = Err(SongError::NotFound("missing".to_string()));
        record("metrics_test", &result);
        record::<()>("metrics_test", &Ok(()));

        let after = SONG_OPERATIONS
            .with_label_values(&["metrics_test", "not_found"])
            .get();
        assert_eq!(after, before + 1);
        assert!(
            SONG_OPERATIONS
                .with_label_values(&["metrics_test", "ok"])
                .get()
                >= 1
        );
    }
}

//! Error types for the geosample-stratified crate.

/// Error type for all fallible operations in the geosample-stratified crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StratifiedError {
    /// Returned when the total number of requested samples is zero.
    #[error("no samples requested")]
    NoSamplesRequested,

    /// Returned when a class has fewer positions than requested.
    ///
    /// Without replacement this fires whenever `requested > available`; with
    /// replacement only when a positive request meets an empty class.
    #[error("insufficient population for value {value}: requested {requested}, available {available}")]
    InsufficientPopulation {
        /// Debug rendering of the class value.
        value: String,
        /// Number of samples requested for the class.
        requested: usize,
        /// Number of positions holding the class value.
        available: usize,
    },

    /// Returned when the per-class counts add up to more than `usize::MAX`.
    #[error("requested sample counts overflow usize")]
    CountOverflow,

    /// Returned when the same class value appears twice in a per-class spec.
    #[error("value {value} is listed more than once")]
    DuplicateValue {
        /// Debug rendering of the repeated class value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_no_samples_requested() {
        let e = StratifiedError::NoSamplesRequested;
        assert_eq!(e.to_string(), "no samples requested");
    }

    #[test]
    fn error_insufficient_population() {
        let e = StratifiedError::InsufficientPopulation {
            value: "2".to_string(),
            requested: 100,
            available: 0,
        };
        assert_eq!(
            e.to_string(),
            "insufficient population for value 2: requested 100, available 0"
        );
    }

    #[test]
    fn error_duplicate_value() {
        let e = StratifiedError::DuplicateValue {
            value: "7".to_string(),
        };
        assert_eq!(e.to_string(), "value 7 is listed more than once");
    }

    #[test]
    fn error_count_overflow() {
        let e = StratifiedError::CountOverflow;
        assert_eq!(e.to_string(), "requested sample counts overflow usize");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<StratifiedError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StratifiedError>();
    }
}

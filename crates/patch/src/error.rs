//! Error types for the geosample-patch crate.

use crate::feature::FeatureKind;

/// Error type for all fallible operations in the geosample-patch crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchError {
    /// Returned when a feature lookup finds nothing.
    #[error("feature {kind}:{name} not found")]
    MissingFeature {
        /// Kind of the missing feature.
        kind: FeatureKind,
        /// Name of the missing feature.
        name: String,
    },

    /// Returned when an array is stored under `Vector` or geometries under a
    /// raster or scalar kind.
    #[error("{kind} features cannot hold {got}")]
    KindMismatch {
        /// Kind the feature was addressed with.
        kind: FeatureKind,
        /// Description of the offered value.
        got: &'static str,
    },

    /// Returned when an array's dimensionality does not fit its kind.
    #[error("{kind} features must be {expected}D, got {got}D")]
    DimensionMismatch {
        /// Kind the array was addressed with.
        kind: FeatureKind,
        /// Required number of dimensions.
        expected: usize,
        /// Actual number of dimensions.
        got: usize,
    },

    /// Returned when a scalar feature is neither 1D nor 2D.
    #[error("scalar features must be 1D or 2D, got {got}D")]
    ScalarDimension {
        /// Actual number of dimensions.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_missing_feature() {
        let e = PatchError::MissingFeature {
            kind: FeatureKind::TemporalRaster,
            name: "BANDS".to_string(),
        };
        assert_eq!(e.to_string(), "feature temporal:BANDS not found");
    }

    #[test]
    fn error_kind_mismatch() {
        let e = PatchError::KindMismatch {
            kind: FeatureKind::Vector,
            got: "an array",
        };
        assert_eq!(e.to_string(), "vector features cannot hold an array");
    }

    #[test]
    fn error_dimension_mismatch() {
        let e = PatchError::DimensionMismatch {
            kind: FeatureKind::TimelessRaster,
            expected: 3,
            got: 2,
        };
        assert_eq!(e.to_string(), "timeless features must be 3D, got 2D");
    }

    #[test]
    fn error_scalar_dimension() {
        let e = PatchError::ScalarDimension { got: 4 };
        assert_eq!(e.to_string(), "scalar features must be 1D or 2D, got 4D");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PatchError>();
    }
}

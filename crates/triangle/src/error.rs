//! Error types for the geosample-triangle crate.

/// Error type for all fallible operations in the geosample-triangle crate.
///
/// Every variant except [`TriangleError::InvalidN`] describes bad input
/// geometry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TriangleError {
    /// Returned when the triangle's vertices are collinear or coincide.
    #[error("degenerate triangle: zero area")]
    DegenerateTriangle,

    /// Returned when a vertex has a NaN or infinite coordinate.
    #[error("non-finite coordinate in {input}")]
    NonFiniteCoordinate {
        /// Name of the offending input.
        input: &'static str,
    },

    /// Returned when a polygon does not describe exactly three vertices.
    #[error("polygon is not a triangle: {vertices} distinct vertices, {interiors} interior rings")]
    NotATriangle {
        /// Number of vertices in the exterior ring, excluding the closing one.
        vertices: usize,
        /// Number of interior rings.
        interiors: usize,
    },

    /// Returned when a polygon has no area to sample from.
    #[error("polygon has zero area")]
    EmptyPolygon,

    /// Returned when zero points are requested.
    #[error("n must be >= 1, got {n}")]
    InvalidN {
        /// The invalid n value.
        n: usize,
    },
}

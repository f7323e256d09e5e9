//! Error types for the geosample-window crate.

/// Error type for all fallible operations in the geosample-window crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WindowError {
    /// Returned when row and column sequences differ in length.
    #[error("rows length {rows} does not match cols length {cols}")]
    LengthMismatch {
        /// Number of row indices.
        rows: usize,
        /// Number of column indices.
        cols: usize,
    },

    /// Returned when a size or stride has a zero side.
    #[error("{name} must be positive in both dimensions, got {height}x{width}")]
    ZeroSize {
        /// Which parameter was zero (`"sample_size"` or `"stride"`).
        name: &'static str,
        /// Height component.
        height: usize,
        /// Width component.
        width: usize,
    },

    /// Returned when a block does not fit inside the raster.
    #[error("block {block_height}x{block_width} does not fit raster {height}x{width}")]
    BlockTooLarge {
        /// Block height.
        block_height: usize,
        /// Block width.
        block_width: usize,
        /// Raster height.
        height: usize,
        /// Raster width.
        width: usize,
    },

    /// Returned when a grid entry points outside the raster.
    #[error("index ({row}, {col}) out of bounds for raster {height}x{width}")]
    OutOfBounds {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
        /// Raster height.
        height: usize,
        /// Raster width.
        width: usize,
    },
}

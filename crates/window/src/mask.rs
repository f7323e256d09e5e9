//! Provenance rasters marking which pixels were sampled.

use ndarray::{Array2, Array3};

use crate::error::WindowError;

/// Checks that both grids share a shape and every entry lies inside `extent`.
fn check_grids(
    extent: (usize, usize),
    row_grid: &Array2<usize>,
    col_grid: &Array2<usize>,
) -> Result<(), WindowError> {
    if row_grid.dim() != col_grid.dim() {
        return Err(WindowError::LengthMismatch {
            rows: row_grid.len(),
            cols: col_grid.len(),
        });
    }
    let (height, width) = extent;
    for (&row, &col) in row_grid.iter().zip(col_grid.iter()) {
        if row >= height || col >= width {
            return Err(WindowError::OutOfBounds {
                row,
                col,
                height,
                width,
            });
        }
    }
    Ok(())
}

/// Builds the boolean sampling mask of shape `(H, W, 1)`.
///
/// A pixel is `true` when any block covers it. Overlapping blocks mark a
/// pixel once.
///
/// # Errors
///
/// [`WindowError::LengthMismatch`] for grids of different shapes,
/// [`WindowError::OutOfBounds`] for an entry outside the raster.
pub fn mask_of_samples(
    extent: (usize, usize),
    row_grid: &Array2<usize>,
    col_grid: &Array2<usize>,
) -> Result<Array3<bool>, WindowError> {
    check_grids(extent, row_grid, col_grid)?;
    let mut mask = Array3::from_elem((extent.0, extent.1, 1), false);
    for (&row, &col) in row_grid.iter().zip(col_grid.iter()) {
        mask[[row, col, 0]] = true;
    }
    Ok(mask)
}

/// Builds a coverage count raster of shape `(H, W, 1)`.
///
/// Each pixel holds the number of blocks covering it, saturating at
/// `u16::MAX`.
///
/// # Errors
///
/// Same as [`mask_of_samples`].
pub fn count_of_samples(
    extent: (usize, usize),
    row_grid: &Array2<usize>,
    col_grid: &Array2<usize>,
) -> Result<Array3<u16>, WindowError> {
    check_grids(extent, row_grid, col_grid)?;
    let mut counts = Array3::<u16>::zeros((extent.0, extent.1, 1));
    for (&row, &col) in row_grid.iter().zip(col_grid.iter()) {
        let cell = &mut counts[[row, col, 0]];
        *cell = cell.saturating_add(1);
    }
    Ok(counts)
}

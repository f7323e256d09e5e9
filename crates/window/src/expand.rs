//! Expansion of sample origins into block index grids.

use ndarray::Array2;

use crate::error::WindowError;

/// Rejects a size or stride with a zero side.
///
/// # Errors
///
/// [`WindowError::ZeroSize`] naming the offending parameter.
pub fn check_positive(
    name: &'static str,
    (height, width): (usize, usize),
) -> Result<(), WindowError> {
    if height == 0 || width == 0 {
        return Err(WindowError::ZeroSize {
            name,
            height,
            width,
        });
    }
    Ok(())
}

/// Expands every `(row, col)` origin into the `h×w` block it anchors.
///
/// Returns `(row_grid, col_grid)`, both of shape `(h·N, w)`. Rows
/// `k·h .. (k+1)·h` of each grid belong to sample `k`, so
/// `row_grid[[k·h + i, j]] == rows[k] + i` and
/// `col_grid[[k·h + i, j]] == cols[k] + j`.
///
/// No bounds checking is done; callers only pass origins whose block fits.
///
/// # Errors
///
/// [`WindowError::LengthMismatch`] if `rows` and `cols` differ in length,
/// [`WindowError::ZeroSize`] if `sample_size` has a zero side.
pub fn expand_to_grids(
    rows: &[usize],
    cols: &[usize],
    sample_size: (usize, usize),
) -> Result<(Array2<usize>, Array2<usize>), WindowError> {
    if rows.len() != cols.len() {
        return Err(WindowError::LengthMismatch {
            rows: rows.len(),
            cols: cols.len(),
        });
    }
    check_positive("sample_size", sample_size)?;

    let (h, w) = sample_size;
    let shape = (h * rows.len(), w);
    let row_grid = Array2::from_shape_fn(shape, |(r, _)| rows[r / h] + r % h);
    let col_grid = Array2::from_shape_fn(shape, |(r, c)| cols[r / h] + c);
    Ok((row_grid, col_grid))
}

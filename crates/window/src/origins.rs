//! Valid-origin regions and regular grid origins.

use crate::error::WindowError;
use crate::expand::check_positive;

/// Returns the shape of the region where a block of `sample_size` can be
/// anchored without leaving a raster of shape `extent`.
///
/// For a raster `(H, W)` and block `(h, w)` this is `(H-h+1, W-w+1)`.
///
/// # Errors
///
/// [`WindowError::ZeroSize`] for a zero-sided block,
/// [`WindowError::BlockTooLarge`] when the block exceeds the raster.
pub fn valid_origin_shape(
    extent: (usize, usize),
    sample_size: (usize, usize),
) -> Result<(usize, usize), WindowError> {
    check_positive("sample_size", sample_size)?;
    let (height, width) = extent;
    let (h, w) = sample_size;
    if h > height || w > width {
        return Err(WindowError::BlockTooLarge {
            block_height: h,
            block_width: w,
            height,
            width,
        });
    }
    Ok((height - h + 1, width - w + 1))
}

/// Returns the origins of a regular grid of blocks, row-major.
///
/// Origins are `(i·sh, j·sw)` for every `i, j ≥ 0` whose block fits inside
/// the raster: all columns of the first grid row, then the next row, and so
/// on.
///
/// # Errors
///
/// [`WindowError::ZeroSize`] for a zero-sided block or stride,
/// [`WindowError::BlockTooLarge`] when not even one block fits.
pub fn grid_origins(
    extent: (usize, usize),
    sample_size: (usize, usize),
    stride: (usize, usize),
) -> Result<(Vec<usize>, Vec<usize>), WindowError> {
    check_positive("stride", stride)?;
    let (n_rows, n_cols) = valid_origin_shape(extent, sample_size)?;
    let (sh, sw) = stride;

    let grid_rows: Vec<usize> = (0..n_rows).step_by(sh).collect();
    let grid_cols: Vec<usize> = (0..n_cols).step_by(sw).collect();

    let n = grid_rows.len() * grid_cols.len();
    let mut rows = Vec::with_capacity(n);
    let mut cols = Vec::with_capacity(n);
    for &r in &grid_rows {
        for &c in &grid_cols {
            rows.push(r);
            cols.push(c);
        }
    }
    Ok((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_origin_shape() {
        assert_eq!(valid_origin_shape((10, 8), (1, 1)).unwrap(), (10, 8));
        assert_eq!(valid_origin_shape((10, 8), (3, 2)).unwrap(), (8, 7));
        assert_eq!(valid_origin_shape((10, 8), (10, 8)).unwrap(), (1, 1));
    }

    #[test]
    fn test_valid_origin_shape_too_large() {
        let result = valid_origin_shape((10, 8), (11, 1));
        assert!(matches!(
            result,
            Err(WindowError::BlockTooLarge {
                block_height: 11,
                height: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_grid_origins_row_major() {
        let (rows, cols) = grid_origins((4, 5), (2, 2), (2, 3)).unwrap();
        // valid origin rows 0..3 step 2 -> [0, 2]; cols 0..4 step 3 -> [0, 3]
        assert_eq!(rows, vec![0, 0, 2, 2]);
        assert_eq!(cols, vec![0, 3, 0, 3]);
    }

    #[test]
    fn test_grid_origins_unit() {
        let (rows, cols) = grid_origins((3, 2), (1, 1), (1, 1)).unwrap();
        assert_eq!(rows, vec![0, 0, 1, 1, 2, 2]);
        assert_eq!(cols, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_grid_origins_zero_stride() {
        let result = grid_origins((3, 3), (1, 1), (1, 0));
        assert!(matches!(
            result,
            Err(WindowError::ZeroSize { name: "stride", .. })
        ));
    }
}

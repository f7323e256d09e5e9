//! Block windows over rasters.
//!
//! Sample origins are anchored at the top-left corner of an `h×w` block.
//! This crate turns origins into index grids, enumerates where blocks may be
//! anchored, and records which pixels the blocks cover.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`expand_to_grids`] | `(h·N, w)` row and column grids |
//! | [`valid_origin_shape`] | `(H-h+1, W-w+1)` |
//! | [`grid_origins`] | row-major strided origins |
//! | [`mask_of_samples`] | `(H, W, 1)` boolean union |
//! | [`count_of_samples`] | `(H, W, 1)` coverage counts |
//!
//! # Example
//!
//! ```
//! use geosample_window::{expand_to_grids, mask_of_samples};
//!
//! let (rows, cols) = expand_to_grids(&[0, 2], &[1, 0], (2, 2)).unwrap();
//! assert_eq!(rows.dim(), (4, 2));
//!
//! let mask = mask_of_samples((4, 3), &rows, &cols).unwrap();
//! assert_eq!(mask.iter().filter(|&&m| m).count(), 8);
//! ```

pub mod error;

mod expand;
mod mask;
mod origins;

pub use error::WindowError;
pub use expand::{check_positive, expand_to_grids};
pub use mask::{count_of_samples, mask_of_samples};
pub use origins::{grid_origins, valid_origin_shape};

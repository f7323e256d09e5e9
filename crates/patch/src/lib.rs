//! # geosample-patch
//!
//! In-memory container of co-registered raster and vector features, and the
//! [`FeatureStore`] interface samplers read from and write to.
//!
//! ## Layout
//!
//! ```mermaid
//! graph LR
//!     A["(FeatureKind, name)"] --> B["Feature::Array"]
//!     A --> C["Feature::Vector"]
//!     B --> D["FeatureArray: f32 / i64 / u16 / bool"]
//! ```
//!
//! Temporal rasters are `(T, H, W, C)`, timeless rasters `(H, W, C)`. A patch
//! may also carry a bounding box and a CRS; nothing here reprojects or clips.
//!
//! ## Quick Start
//!
//! ```
//! use geosample_patch::{Crs, FeatureKind, FeatureStore, Patch};
//! use ndarray::Array3;
//!
//! let mut patch = Patch::new().with_crs(Crs::WGS84);
//! patch.set(FeatureKind::TimelessRaster, "LULC", Array3::<i64>::zeros((5, 6, 1)).into())?;
//! assert_eq!(patch.spatial_shape(FeatureKind::TimelessRaster, "LULC")?, (5, 6));
//! # Ok::<(), geosample_patch::PatchError>(())
//! ```

mod error;
mod feature;
mod patch;

pub use error::PatchError;
pub use feature::{Feature, FeatureArray, FeatureKind};
pub use patch::{Crs, FeatureStore, Patch};

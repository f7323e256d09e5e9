//! # geosample
//!
//! Spatial sampling of raster and vector patches: class-stratified pixel
//! draws, fixed-size block windows, regular grids and uniform points inside
//! triangles and polygons.
//!
//! ## Workspace
//!
//! ```mermaid
//! graph LR
//!     A["geosample-stratified"] --> T["geosample-tasks"]
//!     B["geosample-window"] --> T
//!     P["geosample-patch"] --> T
//!     T --> R["geosample (jobs, logging)"]
//!     V["geosample-triangle"] --> R
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use geosample::{FeatureKind, FeatureStore, JobConfig, Patch};
//! use ndarray::Array3;
//!
//! let job = JobConfig::from_toml_str(r#"
//!     seed = 7
//!
//!     [[features]]
//!     kind = "timeless"
//!     source = "LULC"
//!     destination = "LULC_SAMPLED"
//!
//!     [output]
//!     mask_of_samples = "MASK"
//!
//!     [sampler]
//!     method = "fraction"
//!     label = "LULC"
//!     fraction = 0.5
//! "#)?
//! .build()?;
//!
//! let mut patch = Patch::new();
//! patch.set(FeatureKind::TimelessRaster, "LULC", Array3::<i64>::ones((4, 4, 1)).into())?;
//! let origins = job.run(&mut patch)?;
//! assert_eq!(origins.len(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod logging;

pub use config::{Job, JobConfig};
pub use error::ConfigError;

pub use geosample_patch::{Crs, Feature, FeatureArray, FeatureKind, FeatureStore, Patch, PatchError};
pub use geosample_stratified::{SampleIndices, SampleSpec, StratifiedError, sample_by_values};
pub use geosample_tasks::{
    Amount, BlockSamplingTask, ErrorKind, FeatureToSample, Fraction, FractionSamplingTask,
    GridSamplingTask, SampleOutputs, SamplingError, SamplingTask, execute_many,
};
pub use geosample_triangle::{
    TriangleError, random_point_in_triangle, random_point_in_triangle_default,
    random_points_in_polygon, triangle_from_polygon,
};
pub use geosample_window::{
    WindowError, count_of_samples, expand_to_grids, grid_origins, mask_of_samples,
    valid_origin_shape,
};

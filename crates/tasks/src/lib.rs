//! # geosample-tasks
//!
//! Sampling tasks that read raster features from a [`FeatureStore`], draw
//! block origins, cut the blocks out of every listed feature and write the
//! results back next to a provenance mask.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["label / extent"] -->|"uniform, stratified or grid"| B["origins"]
//!     B -->|"expand_to_grids()"| C["row / col grids"]
//!     C -->|"gather"| D["sampled features"]
//!     C -->|"mask_of_samples()"| E["coverage mask"]
//! ```
//!
//! | Task | Origins |
//! |------|---------|
//! | [`BlockSamplingTask`] | uniform, without replacement |
//! | [`FractionSamplingTask`] | per-class share of a label raster |
//! | [`GridSamplingTask`] | regular stride, no randomness |
//!
//! Sampled features keep every non-spatial axis; the spatial axes become
//! `(N·h, w)` for `N` blocks of size `(h, w)`. A failing task leaves the
//! store untouched.
//!
//! ## Quick Start
//!
//! ```
//! use geosample_patch::{FeatureKind, FeatureStore, Patch};
//! use geosample_tasks::{FeatureToSample, GridSamplingTask};
//! use ndarray::Array3;
//!
//! let mut patch = Patch::new();
//! patch.set(FeatureKind::TimelessRaster, "DEM", Array3::<f32>::zeros((8, 8, 1)).into())?;
//!
//! let task = GridSamplingTask::new(
//!     vec![FeatureToSample::new(FeatureKind::TimelessRaster, "DEM", "DEM_TILES")],
//!     (4, 4),
//!     (4, 4),
//! )?;
//! let origins = task.execute(&mut patch)?;
//! assert_eq!(origins.len(), 4);
//! # Ok::<(), geosample_tasks::SamplingError>(())
//! ```
//!
//! [`FeatureStore`]: geosample_patch::FeatureStore

mod batch;
mod block;
mod config;
mod error;
mod extract;
mod fraction;
mod grid;
mod rng;
mod task;

pub use batch::execute_many;
pub use block::BlockSamplingTask;
pub use config::{Amount, FeatureToSample, Fraction, SampleOutputs};
pub use error::{ErrorKind, SamplingError};
pub use fraction::FractionSamplingTask;
pub use grid::GridSamplingTask;
pub use rng::make_rng;
pub use task::SamplingTask;

//! Class-stratified sampling of pixel positions.
//!
//! Given a 2D label array and a per-class request, this crate draws exactly
//! the requested number of `(row, col)` positions for every class, with or
//! without replacement.
//!
//! # Quick start
//!
//! ```
//! use geosample_stratified::{SampleSpec, sample_by_values};
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let labels = array![[0, 0, 1], [1, 1, 2]];
//! let spec = SampleSpec::per_class([(1, 2), (2, 1)]);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let indices = sample_by_values(labels.view(), &spec, &mut rng, false).unwrap();
//! assert_eq!(indices.len(), 3);
//! ```
//!
//! # Architecture
//!
//! ```text
//! sample_by_values()
//!   ├─ resolve_counts()     (spec.rs)
//!   ├─ group_positions()    (sample.rs, single pass over the labels)
//!   └─ draw_class()         (sample.rs, partial shuffle or uniform picks)
//! ```

pub mod error;
pub mod result;
pub mod spec;

pub(crate) mod sample;

pub use error::StratifiedError;
pub use result::SampleIndices;
pub use sample::sample_by_values;
pub use spec::SampleSpec;

//! Deterministic sampling on a regular grid.

use geosample_patch::FeatureStore;
use geosample_stratified::SampleIndices;
use geosample_window::{check_positive, grid_origins};
use tracing::debug;

use crate::config::{FeatureToSample, SampleOutputs, validate_features};
use crate::error::SamplingError;
use crate::extract::{apply_sampling, extent_of};

/// Windows the whole raster with blocks placed every `stride` pixels.
///
/// Origins are `(i·sh, j·sw)` in row-major order, keeping only those whose
/// block fits. With `sample_size == stride` the blocks tile the raster.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSamplingTask {
    features: Vec<FeatureToSample>,
    sample_size: (usize, usize),
    stride: (usize, usize),
    outputs: SampleOutputs,
}

impl GridSamplingTask {
    /// Creates a grid task.
    ///
    /// # Errors
    ///
    /// A validation error for an empty feature list or a zero-sided sample
    /// size or stride.
    pub fn new(
        features: Vec<FeatureToSample>,
        sample_size: (usize, usize),
        stride: (usize, usize),
    ) -> Result<Self, SamplingError> {
        let task = Self {
            features,
            sample_size,
            stride,
            outputs: SampleOutputs::default(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Stores the boolean coverage mask under `name`.
    pub fn with_mask_of_samples(mut self, name: impl Into<String>) -> Self {
        self.outputs.mask_of_samples = Some(name.into());
        self
    }

    /// Stores the per-pixel block count under `name`.
    pub fn with_count_of_samples(mut self, name: impl Into<String>) -> Self {
        self.outputs.count_of_samples = Some(name.into());
        self
    }

    /// Returns the features to sample.
    pub fn features(&self) -> &[FeatureToSample] {
        &self.features
    }

    /// Returns the block size.
    pub fn sample_size(&self) -> (usize, usize) {
        self.sample_size
    }

    /// Returns the stride.
    pub fn stride(&self) -> (usize, usize) {
        self.stride
    }

    /// Returns the provenance outputs.
    pub fn outputs(&self) -> &SampleOutputs {
        &self.outputs
    }

    /// Checks the parameters without looking at any data.
    pub fn validate(&self) -> Result<(), SamplingError> {
        validate_features(&self.features)?;
        check_positive("sample_size", self.sample_size)?;
        check_positive("stride", self.stride)?;
        Ok(())
    }

    /// Samples `store` and returns the grid origins.
    ///
    /// # Errors
    ///
    /// A bounds error when the block is larger than the raster, and input
    /// errors for missing or mismatched features.
    #[tracing::instrument(skip(self, store), fields(sample_size = ?self.sample_size, stride = ?self.stride))]
    pub fn execute<S: FeatureStore + ?Sized>(
        &self,
        store: &mut S,
    ) -> Result<SampleIndices, SamplingError> {
        self.validate()?;
        let extent = extent_of(store, &self.features)?;
        let (rows, cols) = grid_origins(extent, self.sample_size, self.stride)?;
        debug!(n = rows.len(), "grid origins");
        let origins = SampleIndices::new(rows, cols);

        apply_sampling(
            store,
            &self.features,
            &self.outputs,
            extent,
            &origins,
            self.sample_size,
        )?;
        Ok(origins)
    }
}

//! Uniform random block sampling.

use geosample_patch::FeatureStore;
use geosample_stratified::SampleIndices;
use geosample_window::{check_positive, valid_origin_shape};
use rand::seq::index;
use tracing::debug;

use crate::config::{Amount, FeatureToSample, SampleOutputs, validate_features};
use crate::error::SamplingError;
use crate::extract::{apply_sampling, extent_of};
use crate::rng::make_rng;

/// Draws blocks at uniformly random positions and samples every listed
/// feature there.
///
/// Block origins are drawn without replacement from the positions where a
/// full block fits. Blocks may overlap.
///
/// # Example
///
/// ```
/// use geosample_patch::{FeatureKind, FeatureStore, Patch};
/// use geosample_tasks::{Amount, BlockSamplingTask, FeatureToSample};
/// use ndarray::Array4;
///
/// let mut patch = Patch::new();
/// patch.set(FeatureKind::TemporalRaster, "BANDS", Array4::<f32>::zeros((2, 10, 10, 3)).into())?;
///
/// let task = BlockSamplingTask::new(
///     vec![FeatureToSample::new(FeatureKind::TemporalRaster, "BANDS", "SAMPLED")],
///     Amount::Count(4),
/// )?
/// .with_sample_size((2, 2))
/// .with_mask_of_samples("MASK");
///
/// let origins = task.execute(&mut patch, Some(42))?;
/// assert_eq!(origins.len(), 4);
/// assert_eq!(patch.get_array(FeatureKind::TemporalRaster, "SAMPLED")?.shape(), &[2, 8, 2, 3]);
/// # Ok::<(), geosample_tasks::SamplingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSamplingTask {
    features: Vec<FeatureToSample>,
    amount: Amount,
    sample_size: (usize, usize),
    outputs: SampleOutputs,
}

impl BlockSamplingTask {
    /// Creates a task sampling `features` with the given amount.
    ///
    /// Defaults: `sample_size = (1, 1)`, no mask or count output.
    pub fn new(features: Vec<FeatureToSample>, amount: Amount) -> Result<Self, SamplingError> {
        let task = Self {
            features,
            amount,
            sample_size: (1, 1),
            outputs: SampleOutputs::default(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Sets the block size `(h, w)`.
    pub fn with_sample_size(mut self, sample_size: (usize, usize)) -> Self {
        self.sample_size = sample_size;
        self
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

    /// Returns the amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the block size.
    pub fn sample_size(&self) -> (usize, usize) {
        self.sample_size
    }

    /// Returns the provenance outputs.
    pub fn outputs(&self) -> &SampleOutputs {
        &self.outputs
    }

    /// Checks the parameters without looking at any data.
    pub fn validate(&self) -> Result<(), SamplingError> {
        validate_features(&self.features)?;
        self.amount.validate()?;
        check_positive("sample_size", self.sample_size)?;
        Ok(())
    }

    /// Samples `store` and returns the block origins.
    ///
    /// # Errors
    ///
    /// Validation errors for bad parameters, [`SamplingError::InsufficientOrigins`]
    /// when more blocks are requested than fit, a bounds error when the block
    /// is larger than the raster, and input errors for missing or
    /// mismatched features.
    #[tracing::instrument(skip(self, store), fields(n_features = self.features.len()))]
    pub fn execute<S: FeatureStore + ?Sized>(
        &self,
        store: &mut S,
        seed: Option<u64>,
    ) -> Result<SampleIndices, SamplingError> {
        self.validate()?;
        let extent = extent_of(store, &self.features)?;
        let (n_rows, n_cols) = valid_origin_shape(extent, self.sample_size)?;
        let n = self.amount.resolve(extent)?;
        let available = n_rows * n_cols;
        if n > available {
            return Err(SamplingError::InsufficientOrigins {
                requested: n,
                available,
            });
        }
        debug!(n, available, "drawing block origins");

        let mut rng = make_rng(seed);
        let picks = index::sample(&mut rng, available, n);
        let mut rows = Vec::with_capacity(n);
        let mut cols = Vec::with_capacity(n);
        for flat in picks.iter() {
            rows.push(flat / n_cols);
            cols.push(flat % n_cols);
        }
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

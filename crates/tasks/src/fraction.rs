//! Class-stratified sampling driven by a fraction of each class.

use std::collections::BTreeMap;

use geosample_patch::{FeatureKind, FeatureStore};
use geosample_stratified::{SampleIndices, SampleSpec, sample_by_values};
use geosample_window::{check_positive, valid_origin_shape};
use ndarray::{ArrayView2, Ix3, s};
use tracing::debug;

use crate::config::{FeatureToSample, Fraction, SampleOutputs, validate_features};
use crate::error::SamplingError;
use crate::extract::{apply_sampling, check_extent, extent_of};
use crate::rng::make_rng;

/// Samples a share of every class of a label raster.
///
/// For each class `v` with population `p` in the region where a block fits,
/// `round(p·f(v))` origins are drawn (ties to even). Classes in
/// `exclude_values` are never sampled, even when the fraction map lists them.
///
/// # Example
///
/// ```
/// use geosample_patch::{FeatureKind, FeatureStore, Patch};
/// use geosample_tasks::{FeatureToSample, FractionSamplingTask};
/// use ndarray::Array3;
///
/// let mut patch = Patch::new();
/// let labels = Array3::<i64>::from_shape_fn((20, 20, 1), |(r, _, _)| (r / 10) as i64);
/// patch.set(FeatureKind::TimelessRaster, "LULC", labels.into())?;
///
/// let task = FractionSamplingTask::new(
///     vec![FeatureToSample::new(FeatureKind::TimelessRaster, "LULC", "LULC_SAMPLED")],
///     "LULC",
///     0.1,
///     false,
/// )?
/// .with_exclude_values([0]);
///
/// let indices = task.execute(&mut patch, Some(7))?;
/// assert_eq!(indices.len(), 20);
/// assert!(indices.rows().iter().all(|&r| r >= 10));
/// # Ok::<(), geosample_tasks::SamplingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FractionSamplingTask {
    features: Vec<FeatureToSample>,
    label: String,
    fraction: Fraction,
    replace: bool,
    exclude_values: Vec<i64>,
    sample_size: (usize, usize),
    outputs: SampleOutputs,
}

impl FractionSamplingTask {
    /// Creates a task sampling `features` at the classes of the timeless
    /// raster `label`.
    ///
    /// Defaults: no excluded values, `sample_size = (1, 1)`, no mask or
    /// count output.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidFraction`] for a negative or non-finite share,
    /// or a share above 1 without replacement.
    pub fn new(
        features: Vec<FeatureToSample>,
        label: impl Into<String>,
        fraction: impl Into<Fraction>,
        replace: bool,
    ) -> Result<Self, SamplingError> {
        let task = Self {
            features,
            label: label.into(),
            fraction: fraction.into(),
            replace,
            exclude_values: Vec::new(),
            sample_size: (1, 1),
            outputs: SampleOutputs::default(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Sets the classes that are never sampled.
    pub fn with_exclude_values(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.exclude_values = values.into_iter().collect();
        self
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

    /// Returns the label feature name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the fraction.
    pub fn fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Returns whether origins may repeat.
    pub fn replace(&self) -> bool {
        self.replace
    }

    /// Returns the excluded classes.
    pub fn exclude_values(&self) -> &[i64] {
        &self.exclude_values
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
        self.fraction.validate(self.replace)?;
        check_positive("sample_size", self.sample_size)?;
        Ok(())
    }

    /// Resolves the fraction against `labels` to per-class counts, in
    /// ascending class order. Classes resolving to zero are left out.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidFraction`] when `population·fraction` does not
    /// fit a `usize`.
    pub fn counts_per_value(
        &self,
        labels: ArrayView2<'_, i64>,
    ) -> Result<Vec<(i64, usize)>, SamplingError> {
        let mut population = BTreeMap::<i64, usize>::new();
        for &value in labels.iter() {
            *population.entry(value).or_default() += 1;
        }

        let mut counts = Vec::with_capacity(population.len());
        for (value, pop) in population {
            if self.exclude_values.contains(&value) {
                continue;
            }
            let Some(f) = self.fraction.for_class(value) else {
                continue;
            };
            let exact = (pop as f64 * f).round_ties_even();
            if exact >= usize::MAX as f64 {
                return Err(SamplingError::InvalidFraction {
                    fraction: f,
                    target: format!("class {value}"),
                });
            }
            let count = exact as usize;
            if count > 0 {
                counts.push((value, count));
            }
        }
        Ok(counts)
    }

    /// Samples `store` and returns the block origins, grouped by class.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidLabel`] when the label is not an `(H, W, 1)`
    /// `i64` raster, a validation error when no class resolves to a positive
    /// count, a population error when a class is too small, and a bounds
    /// error when the block is larger than the raster.
    #[tracing::instrument(skip(self, store), fields(label = %self.label))]
    pub fn execute<S: FeatureStore + ?Sized>(
        &self,
        store: &mut S,
        seed: Option<u64>,
    ) -> Result<SampleIndices, SamplingError> {
        self.validate()?;
        let extent = extent_of(store, &self.features)?;
        check_extent(store, FeatureKind::TimelessRaster, &self.label, extent)?;
        let (n_rows, n_cols) = valid_origin_shape(extent, self.sample_size)?;

        let array = store.get_array(FeatureKind::TimelessRaster, &self.label)?;
        let invalid = || SamplingError::InvalidLabel {
            name: self.label.clone(),
            dtype: array.dtype(),
            shape: array.shape().to_vec(),
        };
        let labels = array
            .as_int64()
            .ok_or_else(invalid)?
            .view()
            .into_dimensionality::<Ix3>()
            .map_err(|_| invalid())?;
        if labels.dim().2 != 1 {
            return Err(invalid());
        }
        let region = labels.slice(s![..n_rows, ..n_cols, 0]);

        let counts = self.counts_per_value(region)?;
        debug!(?counts, "resolved per-class counts");
        let spec = SampleSpec::PerClass(counts);
        let mut rng = make_rng(seed);
        let origins = sample_by_values(region, &spec, &mut rng, self.replace)?;

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

//! A single entry point over the three samplers.

use geosample_patch::FeatureStore;
use geosample_stratified::SampleIndices;

use crate::block::BlockSamplingTask;
use crate::config::FeatureToSample;
use crate::error::SamplingError;
use crate::fraction::FractionSamplingTask;
use crate::grid::GridSamplingTask;

/// Any of the sampling tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingTask {
    /// Uniform random blocks.
    Block(BlockSamplingTask),
    /// Class-stratified blocks.
    Fraction(FractionSamplingTask),
    /// Regular grid of blocks.
    Grid(GridSamplingTask),
}

impl SamplingTask {
    /// Runs the task. Grid sampling ignores `seed`.
    pub fn execute<S: FeatureStore + ?Sized>(
        &self,
        store: &mut S,
        seed: Option<u64>,
    ) -> Result<SampleIndices, SamplingError> {
        match self {
            Self::Block(task) => task.execute(store, seed),
            Self::Fraction(task) => task.execute(store, seed),
            Self::Grid(task) => task.execute(store),
        }
    }

    /// Returns the features to sample.
    pub fn features(&self) -> &[FeatureToSample] {
        match self {
            Self::Block(task) => task.features(),
            Self::Fraction(task) => task.features(),
            Self::Grid(task) => task.features(),
        }
    }

    /// Short name of the sampler.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Block(_) => "block",
            Self::Fraction(_) => "fraction",
            Self::Grid(_) => "grid",
        }
    }
}

impl From<BlockSamplingTask> for SamplingTask {
    fn from(task: BlockSamplingTask) -> Self {
        Self::Block(task)
    }
}

impl From<FractionSamplingTask> for SamplingTask {
    fn from(task: FractionSamplingTask) -> Self {
        Self::Fraction(task)
    }
}

impl From<GridSamplingTask> for SamplingTask {
    fn from(task: GridSamplingTask) -> Self {
        Self::Grid(task)
    }
}

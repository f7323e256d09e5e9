//! TOML job files.

use std::collections::BTreeMap;
use std::path::Path;

use geosample_patch::FeatureStore;
use geosample_stratified::SampleIndices;
use geosample_tasks::{SamplingError, SamplingTask, execute_many};
use serde::Deserialize;
use tracing::info;

use crate::convert;
use crate::error::ConfigError;

/// Top-level job description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Base RNG seed. Absent means OS-seeded.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Raster features to sample.
    pub features: Vec<FeatureToml>,

    /// Provenance outputs.
    #[serde(default)]
    pub output: OutputToml,

    /// Sampler settings.
    pub sampler: SamplerToml,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureToml {
    /// `temporal` or `timeless`.
    pub kind: String,
    pub source: String,
    /// Defaults to `source`, overwriting it.
    #[serde(default)]
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub mask_of_samples: Option<String>,
    #[serde(default)]
    pub count_of_samples: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplerToml {
    /// `block`, `fraction` or `grid`.
    pub method: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub fraction: Option<FractionToml>,
    #[serde(default)]
    pub exclude_values: Vec<i64>,
    #[serde(default)]
    pub replace: bool,
    #[serde(default)]
    pub amount: Option<AmountToml>,
    #[serde(default = "default_sample_size")]
    pub sample_size: [usize; 2],
    /// Defaults to `sample_size`.
    #[serde(default)]
    pub stride: Option<[usize; 2]>,
}

fn default_sample_size() -> [usize; 2] {
    [1, 1]
}

/// A single share, or a table of `class = share`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FractionToml {
    Uniform(f64),
    PerClass(BTreeMap<String, f64>),
}

/// An integer block count, or a float share of the raster.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountToml {
    Count(usize),
    Fraction(f64),
}

/// A sampling task ready to run, with its base seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub task: SamplingTask,
    pub seed: Option<u64>,
}

impl Job {
    /// Runs the task on one store with the job seed.
    pub fn run<S: FeatureStore + ?Sized>(&self, store: &mut S) -> Result<SampleIndices, SamplingError> {
        self.task.execute(store, self.seed)
    }

    /// Runs the task on many stores in parallel, store `i` seeded with
    /// `seed + i`.
    pub fn run_many<S: FeatureStore + Send>(
        &self,
        stores: &mut [S],
    ) -> Vec<Result<SampleIndices, SamplingError>> {
        execute_many(&self.task, stores, self.seed)
    }
}

impl JobConfig {
    /// Parses a job from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a job file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading job");
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the sampling task described by this job.
    pub fn build(&self) -> Result<Job, ConfigError> {
        let features = self
            .features
            .iter()
            .map(convert::build_feature)
            .collect::<Result<Vec<_>, _>>()?;
        let task = convert::build_task(&self.sampler, features, &self.output)?;
        info!(method = task.method(), seed = ?self.seed, "built sampling task");
        Ok(Job {
            task,
            seed: self.seed,
        })
    }
}

//! Pure conversion functions: TOML job structs -> task types.

use std::collections::BTreeMap;

use geosample_patch::FeatureKind;
use geosample_tasks::{
    Amount, BlockSamplingTask, FeatureToSample, Fraction, FractionSamplingTask, GridSamplingTask,
    SamplingTask,
};

use crate::config::{AmountToml, FeatureToml, FractionToml, OutputToml, SamplerToml};
use crate::error::ConfigError;

/// Parses a raster kind name into the corresponding [`FeatureKind`].
pub fn parse_kind(s: &str) -> Result<FeatureKind, ConfigError> {
    match s.to_lowercase().as_str() {
        "temporal" => Ok(FeatureKind::TemporalRaster),
        "timeless" => Ok(FeatureKind::TimelessRaster),
        other => Err(ConfigError::UnknownValue {
            field: "feature kind",
            value: other.to_string(),
        }),
    }
}

/// Converts a TOML fraction, parsing table keys as integer classes.
pub fn parse_fraction(f: &FractionToml) -> Result<Fraction, ConfigError> {
    match f {
        FractionToml::Uniform(v) => Ok(Fraction::Uniform(*v)),
        FractionToml::PerClass(table) => {
            let mut map = BTreeMap::new();
            for (key, value) in table {
                let class = key
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ConfigError::InvalidClass { key: key.clone() })?;
                map.insert(class, *value);
            }
            Ok(Fraction::PerClass(map))
        }
    }
}

/// Converts a TOML amount.
pub fn parse_amount(a: AmountToml) -> Amount {
    match a {
        AmountToml::Count(n) => Amount::Count(n),
        AmountToml::Fraction(f) => Amount::Fraction(f),
    }
}

pub fn build_feature(f: &FeatureToml) -> Result<FeatureToSample, ConfigError> {
    let kind = parse_kind(&f.kind)?;
    let destination = f.destination.as_deref().unwrap_or(&f.source);
    Ok(FeatureToSample::new(kind, f.source.as_str(), destination))
}

/// Builds the task named by `sampler.method`.
pub fn build_task(
    sampler: &SamplerToml,
    features: Vec<FeatureToSample>,
    output: &OutputToml,
) -> Result<SamplingTask, ConfigError> {
    let sample_size = (sampler.sample_size[0], sampler.sample_size[1]);
    let task = match sampler.method.to_lowercase().as_str() {
        "block" => {
            let amount = sampler.amount.ok_or(ConfigError::MissingField {
                method: "block",
                field: "amount",
            })?;
            let mut task = BlockSamplingTask::new(features, parse_amount(amount))?
                .with_sample_size(sample_size);
            if let Some(name) = &output.mask_of_samples {
                task = task.with_mask_of_samples(name.as_str());
            }
            if let Some(name) = &output.count_of_samples {
                task = task.with_count_of_samples(name.as_str());
            }
            task.validate()?;
            SamplingTask::Block(task)
        }
        "fraction" => {
            let label = sampler.label.as_deref().ok_or(ConfigError::MissingField {
                method: "fraction",
                field: "label",
            })?;
            let fraction = sampler.fraction.as_ref().ok_or(ConfigError::MissingField {
                method: "fraction",
                field: "fraction",
            })?;
            let mut task =
                FractionSamplingTask::new(features, label, parse_fraction(fraction)?, sampler.replace)?
                    .with_exclude_values(sampler.exclude_values.iter().copied())
                    .with_sample_size(sample_size);
            if let Some(name) = &output.mask_of_samples {
                task = task.with_mask_of_samples(name.as_str());
            }
            if let Some(name) = &output.count_of_samples {
                task = task.with_count_of_samples(name.as_str());
            }
            task.validate()?;
            SamplingTask::Fraction(task)
        }
        "grid" => {
            let stride = sampler.stride.unwrap_or(sampler.sample_size);
            let mut task = GridSamplingTask::new(features, sample_size, (stride[0], stride[1]))?;
            if let Some(name) = &output.mask_of_samples {
                task = task.with_mask_of_samples(name.as_str());
            }
            if let Some(name) = &output.count_of_samples {
                task = task.with_count_of_samples(name.as_str());
            }
            SamplingTask::Grid(task)
        }
        other => {
            return Err(ConfigError::UnknownValue {
                field: "method",
                value: other.to_string(),
            });
        }
    };
    Ok(task)
}

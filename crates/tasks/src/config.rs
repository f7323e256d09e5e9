//! Parameters shared by the sampling tasks.

use std::collections::BTreeMap;

use geosample_patch::FeatureKind;

use crate::error::SamplingError;

/// A raster feature to sample and where to store the sampled array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureToSample {
    kind: FeatureKind,
    source: String,
    destination: String,
}

impl FeatureToSample {
    /// Samples `source` into `destination`, both under `kind`.
    pub fn new(kind: FeatureKind, source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Samples `name` and overwrites it with the result.
    pub fn in_place(kind: FeatureKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(kind, name.clone(), name)
    }

    /// Returns the feature kind.
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// Returns the source feature name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the destination feature name.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// Rejects an empty feature list and non-raster kinds.
pub(crate) fn validate_features(features: &[FeatureToSample]) -> Result<(), SamplingError> {
    if features.is_empty() {
        return Err(SamplingError::NoFeatures);
    }
    if let Some(f) = features.iter().find(|f| !f.kind.is_raster()) {
        return Err(SamplingError::NotARaster {
            name: f.source.clone(),
        });
    }
    Ok(())
}

/// Number of blocks a [`BlockSamplingTask`](crate::BlockSamplingTask) draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Absolute number of blocks.
    Count(usize),
    /// Share of the raster's pixels, in `(0, 1]`.
    Fraction(f64),
}

impl Amount {
    /// Checks the amount without looking at any data.
    pub fn validate(&self) -> Result<(), SamplingError> {
        match *self {
            Self::Count(0) => Err(SamplingError::InvalidAmount {
                reason: "count must be >= 1".to_string(),
            }),
            Self::Count(_) => Ok(()),
            Self::Fraction(f) if !f.is_finite() || f <= 0.0 || f > 1.0 => {
                Err(SamplingError::InvalidAmount {
                    reason: format!("fraction must be in (0, 1], got {f}"),
                })
            }
            Self::Fraction(_) => Ok(()),
        }
    }

    /// Resolves the amount to a block count for a raster of shape `extent`.
    ///
    /// A fraction `f` becomes `round(H·W·f)`, ties to even.
    pub fn resolve(&self, extent: (usize, usize)) -> Result<usize, SamplingError> {
        self.validate()?;
        let n = match *self {
            Self::Count(n) => n,
            Self::Fraction(f) => ((extent.0 * extent.1) as f64 * f).round_ties_even() as usize,
        };
        if n == 0 {
            return Err(SamplingError::InvalidAmount {
                reason: format!("{self:?} resolves to zero samples for a {}x{} raster", extent.0, extent.1),
            });
        }
        Ok(n)
    }
}

/// Share of each class to sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Fraction {
    /// The same share for every class present.
    Uniform(f64),
    /// Per-class shares; classes not listed are not sampled.
    PerClass(BTreeMap<i64, f64>),
}

impl Fraction {
    /// Checks every share: finite and `>= 0`, and `<= 1` unless sampling
    /// with replacement.
    pub fn validate(&self, replace: bool) -> Result<(), SamplingError> {
        let check = |fraction: f64, target: String| {
            let bad = !fraction.is_finite() || fraction < 0.0 || (!replace && fraction > 1.0);
            if bad {
                Err(SamplingError::InvalidFraction { fraction, target })
            } else {
                Ok(())
            }
        };
        match self {
            Self::Uniform(f) => check(*f, "all classes".to_string()),
            Self::PerClass(map) => map
                .iter()
                .try_for_each(|(class, f)| check(*f, format!("class {class}"))),
        }
    }

    /// Returns the share for `class`, if it is to be sampled at all.
    pub fn for_class(&self, class: i64) -> Option<f64> {
        match self {
            Self::Uniform(f) => Some(*f),
            Self::PerClass(map) => map.get(&class).copied(),
        }
    }
}

impl From<f64> for Fraction {
    fn from(f: f64) -> Self {
        Self::Uniform(f)
    }
}

impl From<BTreeMap<i64, f64>> for Fraction {
    fn from(map: BTreeMap<i64, f64>) -> Self {
        Self::PerClass(map)
    }
}

/// Optional provenance outputs, stored as timeless rasters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleOutputs {
    /// Destination of the boolean coverage mask.
    pub mask_of_samples: Option<String>,
    /// Destination of the per-pixel block count.
    pub count_of_samples: Option<String>,
}

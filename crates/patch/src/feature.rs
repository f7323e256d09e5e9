//! Feature kinds and the values stored under them.

use std::fmt;

use geo::Geometry;
use ndarray::ArrayD;

use crate::error::PatchError;

/// Kind of a feature, fixing its layout.
///
/// | Kind | Value | Layout |
/// |------|-------|--------|
/// | `TemporalRaster` | array | `(T, H, W, C)` |
/// | `TimelessRaster` | array | `(H, W, C)` |
/// | `Scalar` | array | `(T, C)` or `(C,)` |
/// | `Vector` | geometries | list |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKind {
    /// Time series of rasters.
    TemporalRaster,
    /// Single raster.
    TimelessRaster,
    /// Non-spatial values, optionally per time step.
    Scalar,
    /// Vector geometries.
    Vector,
}

impl FeatureKind {
    /// Index of the row (height) axis for raster kinds; the column axis
    /// follows it.
    pub fn spatial_axis(self) -> Option<usize> {
        match self {
            Self::TemporalRaster => Some(1),
            Self::TimelessRaster => Some(0),
            Self::Scalar | Self::Vector => None,
        }
    }

    /// Returns `true` for the two raster kinds.
    pub fn is_raster(self) -> bool {
        self.spatial_axis().is_some()
    }

    /// Checks that `feature` may be stored under this kind.
    pub fn validate(self, feature: &Feature) -> Result<(), PatchError> {
        match (self, feature) {
            (Self::Vector, Feature::Vector(_)) => Ok(()),
            (Self::Vector, Feature::Array(_)) => Err(PatchError::KindMismatch {
                kind: self,
                got: "an array",
            }),
            (_, Feature::Vector(_)) => Err(PatchError::KindMismatch {
                kind: self,
                got: "geometries",
            }),
            (Self::Scalar, Feature::Array(array)) => match array.ndim() {
                1 | 2 => Ok(()),
                got => Err(PatchError::ScalarDimension { got }),
            },
            (_, Feature::Array(array)) => {
                let expected = if self == Self::TemporalRaster { 4 } else { 3 };
                if array.ndim() != expected {
                    return Err(PatchError::DimensionMismatch {
                        kind: self,
                        expected,
                        got: array.ndim(),
                    });
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TemporalRaster => "temporal",
            Self::TimelessRaster => "timeless",
            Self::Scalar => "scalar",
            Self::Vector => "vector",
        };
        f.write_str(name)
    }
}

/// N-dimensional array with one of the supported element types.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureArray {
    /// Reflectances, indices and other continuous values.
    Float32(ArrayD<f32>),
    /// Class labels and integer masks.
    Int64(ArrayD<i64>),
    /// Counts.
    UInt16(ArrayD<u16>),
    /// Boolean masks.
    Bool(ArrayD<bool>),
}

impl FeatureArray {
    /// Returns the array shape.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Float32(a) => a.shape(),
            Self::Int64(a) => a.shape(),
            Self::UInt16(a) => a.shape(),
            Self::Bool(a) => a.shape(),
        }
    }

    /// Returns the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Returns the element type name.
    pub fn dtype(&self) -> &'static str {
        match self {
            Self::Float32(_) => "f32",
            Self::Int64(_) => "i64",
            Self::UInt16(_) => "u16",
            Self::Bool(_) => "bool",
        }
    }

    /// Returns the integer array, if that is the element type.
    pub fn as_int64(&self) -> Option<&ArrayD<i64>> {
        match self {
            Self::Int64(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the float array, if that is the element type.
    pub fn as_float32(&self) -> Option<&ArrayD<f32>> {
        match self {
            Self::Float32(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the boolean array, if that is the element type.
    pub fn as_bool(&self) -> Option<&ArrayD<bool>> {
        match self {
            Self::Bool(a) => Some(a),
            _ => None,
        }
    }
}

macro_rules! impl_from_array {
    ($t:ty, $variant:ident) => {
        impl<D: ndarray::Dimension> From<ndarray::Array<$t, D>> for FeatureArray {
            fn from(array: ndarray::Array<$t, D>) -> Self {
                Self::$variant(array.into_dyn())
            }
        }

        impl<D: ndarray::Dimension> From<ndarray::Array<$t, D>> for Feature {
            fn from(array: ndarray::Array<$t, D>) -> Self {
                Self::Array(array.into())
            }
        }
    };
}

impl_from_array!(f32, Float32);
impl_from_array!(i64, Int64);
impl_from_array!(u16, UInt16);
impl_from_array!(bool, Bool);

/// A value stored in a patch.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Raster or scalar array.
    Array(FeatureArray),
    /// Geometries in the patch CRS.
    Vector(Vec<Geometry<f64>>),
}

impl Feature {
    /// Returns the array, or `None` for geometries.
    pub fn as_array(&self) -> Option<&FeatureArray> {
        match self {
            Self::Array(a) => Some(a),
            Self::Vector(_) => None,
        }
    }

    /// Returns the geometries, or `None` for arrays.
    pub fn as_vector(&self) -> Option<&[Geometry<f64>]> {
        match self {
            Self::Vector(g) => Some(g),
            Self::Array(_) => None,
        }
    }
}

impl From<FeatureArray> for Feature {
    fn from(array: FeatureArray) -> Self {
        Self::Array(array)
    }
}

impl From<Vec<Geometry<f64>>> for Feature {
    fn from(geometries: Vec<Geometry<f64>>) -> Self {
        Self::Vector(geometries)
    }
}

/// Spatial `(H, W)` of an array stored under `kind`.
pub(crate) fn spatial_shape(kind: FeatureKind, array: &FeatureArray) -> Option<(usize, usize)> {
    let axis = kind.spatial_axis()?;
    let shape = array.shape();
    (shape.len() >= axis + 2).then(|| (shape[axis], shape[axis + 1]))
}

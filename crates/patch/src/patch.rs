//! The feature store interface and its in-memory implementation.

use std::collections::BTreeMap;
use std::fmt;

use geo::Rect;

use crate::error::PatchError;
use crate::feature::{Feature, FeatureArray, FeatureKind, spatial_shape};

/// Coordinate reference system, identified by its EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs(pub u32);

impl Crs {
    /// WGS 84 geographic coordinates.
    pub const WGS84: Self = Self(4326);

    /// Returns the EPSG code.
    pub fn epsg(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

/// Read/write access to named features.
///
/// Samplers only touch a patch through this trait, so any container that
/// can look features up by kind and name can be sampled.
pub trait FeatureStore {
    /// Returns the feature stored under `(kind, name)`.
    fn get(&self, kind: FeatureKind, name: &str) -> Result<&Feature, PatchError>;

    /// Stores `feature` under `(kind, name)`, replacing any previous value.
    ///
    /// Fails without modifying the store if the feature does not fit `kind`.
    fn set(&mut self, kind: FeatureKind, name: &str, feature: Feature) -> Result<(), PatchError>;

    /// Returns `true` if a feature is stored under `(kind, name)`.
    fn has(&self, kind: FeatureKind, name: &str) -> bool;

    /// Removes and returns the feature stored under `(kind, name)`.
    fn remove(&mut self, kind: FeatureKind, name: &str) -> Option<Feature>;

    /// Returns the array stored under `(kind, name)`.
    fn get_array(&self, kind: FeatureKind, name: &str) -> Result<&FeatureArray, PatchError> {
        self.get(kind, name)?
            .as_array()
            .ok_or(PatchError::KindMismatch {
                kind,
                got: "geometries",
            })
    }

    /// Returns the `(H, W)` extent of a raster feature.
    fn spatial_shape(&self, kind: FeatureKind, name: &str) -> Result<(usize, usize), PatchError> {
        let array = self.get_array(kind, name)?;
        spatial_shape(kind, array).ok_or(PatchError::KindMismatch {
            kind,
            got: "a non-spatial array",
        })
    }
}

/// In-memory container of co-registered features.
///
/// # Example
///
/// ```
/// use geosample_patch::{FeatureKind, FeatureStore, Patch};
/// use ndarray::Array4;
///
/// let mut patch = Patch::new();
/// patch
///     .set(FeatureKind::TemporalRaster, "BANDS", Array4::<f32>::zeros((3, 10, 12, 4)).into())
///     .unwrap();
/// assert_eq!(patch.spatial_shape(FeatureKind::TemporalRaster, "BANDS").unwrap(), (10, 12));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    features: BTreeMap<(FeatureKind, String), Feature>,
    bbox: Option<Rect<f64>>,
    crs: Option<Crs>,
}

impl Patch {
    /// Creates an empty patch without spatial metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bounding box.
    pub fn with_bbox(mut self, bbox: Rect<f64>) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Sets the coordinate reference system.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    /// Returns the bounding box.
    pub fn bbox(&self) -> Option<Rect<f64>> {
        self.bbox
    }

    /// Returns the coordinate reference system.
    pub fn crs(&self) -> Option<Crs> {
        self.crs
    }

    /// Returns the number of stored features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the patch holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates over `(kind, name, feature)` in kind, then name order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureKind, &str, &Feature)> {
        self.features
            .iter()
            .map(|((kind, name), feature)| (*kind, name.as_str(), feature))
    }
}

impl FeatureStore for Patch {
    fn get(&self, kind: FeatureKind, name: &str) -> Result<&Feature, PatchError> {
        self.features
            .get(&(kind, name.to_string()))
            .ok_or_else(|| PatchError::MissingFeature {
                kind,
                name: name.to_string(),
            })
    }

    fn set(&mut self, kind: FeatureKind, name: &str, feature: Feature) -> Result<(), PatchError> {
        kind.validate(&feature)?;
        self.features.insert((kind, name.to_string()), feature);
        Ok(())
    }

    fn has(&self, kind: FeatureKind, name: &str) -> bool {
        self.features.contains_key(&(kind, name.to_string()))
    }

    fn remove(&mut self, kind: FeatureKind, name: &str) -> Option<Feature> {
        self.features.remove(&(kind, name.to_string()))
    }
}

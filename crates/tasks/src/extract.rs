//! Sub-array extraction and the write-back shared by all tasks.

use geosample_patch::{Feature, FeatureArray, FeatureKind, FeatureStore};
use geosample_stratified::SampleIndices;
use geosample_window::{count_of_samples, expand_to_grids, mask_of_samples};
use ndarray::{Array2, ArrayD, Dimension, IxDyn};
use tracing::debug;

use crate::config::{FeatureToSample, SampleOutputs};
use crate::error::SamplingError;

/// Spatial extent of the first listed feature.
pub(crate) fn extent_of<S: FeatureStore + ?Sized>(
    store: &S,
    features: &[FeatureToSample],
) -> Result<(usize, usize), SamplingError> {
    let first = features.first().ok_or(SamplingError::NoFeatures)?;
    Ok(store.spatial_shape(first.kind(), first.source())?)
}

/// Checks that `name` under `kind` covers `extent`.
pub(crate) fn check_extent<S: FeatureStore + ?Sized>(
    store: &S,
    kind: FeatureKind,
    name: &str,
    extent: (usize, usize),
) -> Result<(), SamplingError> {
    let got = store.spatial_shape(kind, name)?;
    if got != extent {
        return Err(SamplingError::ShapeMismatch {
            name: name.to_string(),
            expected: extent,
            got,
        });
    }
    Ok(())
}

/// Picks `array[.., rows[i, j], cols[i, j], ..]` along the two axes starting
/// at `axis`, keeping every other axis.
fn gather<T: Clone>(
    array: &ArrayD<T>,
    axis: usize,
    row_grid: &Array2<usize>,
    col_grid: &Array2<usize>,
) -> ArrayD<T> {
    let mut shape = array.shape().to_vec();
    let (grid_h, grid_w) = row_grid.dim();
    shape[axis] = grid_h;
    shape[axis + 1] = grid_w;

    ArrayD::from_shape_fn(IxDyn(&shape), |idx| {
        let (i, j) = (idx[axis], idx[axis + 1]);
        let mut src = idx;
        src[axis] = row_grid[[i, j]];
        src[axis + 1] = col_grid[[i, j]];
        array[src.slice()].clone()
    })
}

fn gather_feature(
    array: &FeatureArray,
    axis: usize,
    row_grid: &Array2<usize>,
    col_grid: &Array2<usize>,
) -> FeatureArray {
    match array {
        FeatureArray::Float32(a) => FeatureArray::Float32(gather(a, axis, row_grid, col_grid)),
        FeatureArray::Int64(a) => FeatureArray::Int64(gather(a, axis, row_grid, col_grid)),
        FeatureArray::UInt16(a) => FeatureArray::UInt16(gather(a, axis, row_grid, col_grid)),
        FeatureArray::Bool(a) => FeatureArray::Bool(gather(a, axis, row_grid, col_grid)),
    }
}

/// Expands `origins` into blocks, samples every feature and writes the
/// results and provenance outputs back to `store`.
///
/// Everything is computed and validated before the first write, so on error
/// the store is left as it was.
pub(crate) fn apply_sampling<S: FeatureStore + ?Sized>(
    store: &mut S,
    features: &[FeatureToSample],
    outputs: &SampleOutputs,
    extent: (usize, usize),
    origins: &SampleIndices,
    sample_size: (usize, usize),
) -> Result<(), SamplingError> {
    let (row_grid, col_grid) = expand_to_grids(origins.rows(), origins.cols(), sample_size)?;
    // Bounds-checks the grids, so the gathers below cannot index out of range.
    let mask = mask_of_samples(extent, &row_grid, &col_grid)?;

    let mut pending: Vec<(FeatureKind, String, Feature)> = Vec::with_capacity(features.len() + 2);
    for feature in features {
        let kind = feature.kind();
        check_extent(store, kind, feature.source(), extent)?;
        let axis = kind.spatial_axis().ok_or_else(|| SamplingError::NotARaster {
            name: feature.source().to_string(),
        })?;
        let array = store.get_array(kind, feature.source())?;
        let sampled = gather_feature(array, axis, &row_grid, &col_grid);
        debug!(
            source = feature.source(),
            destination = feature.destination(),
            shape = ?sampled.shape(),
            "sampled feature"
        );
        pending.push((kind, feature.destination().to_string(), sampled.into()));
    }

    if let Some(name) = &outputs.count_of_samples {
        let counts = count_of_samples(extent, &row_grid, &col_grid)?;
        pending.push((FeatureKind::TimelessRaster, name.clone(), counts.into()));
    }
    if let Some(name) = &outputs.mask_of_samples {
        pending.push((FeatureKind::TimelessRaster, name.clone(), mask.into()));
    }

    for (kind, _, feature) in &pending {
        kind.validate(feature)?;
    }
    for (kind, name, feature) in pending {
        store.set(kind, &name, feature)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geosample_patch::Patch;
    use ndarray::{Array3, Array4, array};

    #[test]
    fn test_gather_timeless_keeps_channels() {
        let a = Array3::from_shape_fn((4, 5, 2), |(r, c, ch)| (r * 100 + c * 10 + ch) as i64)
            .into_dyn();
        let rows = array![[1, 1], [2, 2]];
        let cols = array![[3, 4], [3, 4]];
        let out = gather(&a, 0, &rows, &cols);
        assert_eq!(out.shape(), &[2, 2, 2]);
        assert_eq!(out[[0, 0, 0]], 130);
        assert_eq!(out[[0, 1, 1]], 141);
        assert_eq!(out[[1, 0, 0]], 230);
    }

    #[test]
    fn test_gather_temporal_keeps_time_axis() {
        let a = Array4::from_shape_fn((3, 4, 4, 1), |(t, r, c, _)| (t * 100 + r * 10 + c) as f32)
            .into_dyn();
        let rows = array![[2], [0]];
        let cols = array![[1], [3]];
        let out = gather(&a, 1, &rows, &cols);
        assert_eq!(out.shape(), &[3, 2, 1, 1]);
        assert_eq!(out[[2, 0, 0, 0]], 221.0);
        assert_eq!(out[[1, 1, 0, 0]], 103.0);
    }

    #[test]
    fn test_apply_is_atomic_on_shape_mismatch() {
        let mut patch = Patch::new();
        patch
            .set(FeatureKind::TimelessRaster, "A", Array3::<f32>::zeros((4, 4, 1)).into())
            .unwrap();
        patch
            .set(FeatureKind::TimelessRaster, "B", Array3::<f32>::zeros((5, 4, 1)).into())
            .unwrap();
        let features = [
            FeatureToSample::new(FeatureKind::TimelessRaster, "A", "A_S"),
            FeatureToSample::new(FeatureKind::TimelessRaster, "B", "B_S"),
        ];
        let outputs = SampleOutputs {
            mask_of_samples: Some("MASK".to_string()),
            count_of_samples: None,
        };
        let origins = SampleIndices::new(vec![0], vec![0]);
        let before = patch.clone();
        let result = apply_sampling(&mut patch, &features, &outputs, (4, 4), &origins, (1, 1));
        assert!(matches!(result, Err(SamplingError::ShapeMismatch { .. })));
        assert_eq!(patch, before);
    }

    #[test]
    fn test_apply_writes_outputs() {
        let mut patch = Patch::new();
        patch
            .set(FeatureKind::TimelessRaster, "A", Array3::<f32>::ones((4, 4, 3)).into())
            .unwrap();
        let features = [FeatureToSample::new(FeatureKind::TimelessRaster, "A", "A_S")];
        let outputs = SampleOutputs {
            mask_of_samples: Some("MASK".to_string()),
            count_of_samples: Some("COUNT".to_string()),
        };
        let origins = SampleIndices::new(vec![0, 1], vec![0, 1]);
        apply_sampling(&mut patch, &features, &outputs, (4, 4), &origins, (2, 2)).unwrap();

        let sampled = patch.get_array(FeatureKind::TimelessRaster, "A_S").unwrap();
        assert_eq!(sampled.shape(), &[4, 2, 3]);
        let mask = patch.get_array(FeatureKind::TimelessRaster, "MASK").unwrap();
        assert_eq!(mask.as_bool().unwrap().iter().filter(|&&m| m).count(), 7);
        let counts = patch.get_array(FeatureKind::TimelessRaster, "COUNT").unwrap();
        match counts {
            FeatureArray::UInt16(c) => assert_eq!(c[[1, 1, 0]], 2),
            other => panic!("unexpected dtype {}", other.dtype()),
        }
    }
}

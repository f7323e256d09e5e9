//! Integration tests for fraction sampling.

use std::collections::BTreeMap;

use geosample_patch::{FeatureKind, FeatureStore, Patch};
use geosample_tasks::{ErrorKind, FeatureToSample, FractionSamplingTask};
use ndarray::{Array3, Array4};

const H: usize = 100;
const W: usize = 75;

/// Background 0, a square of 1 and a strip of 2 drawn over it.
fn labels() -> Array3<i64> {
    let mut labels = Array3::<i64>::zeros((H, W, 1));
    labels
        .slice_mut(ndarray::s![40..60, 40..60, ..])
        .fill(1);
    labels
        .slice_mut(ndarray::s![50..80, 55..70, ..])
        .fill(2);
    labels
}

fn eo_patch() -> Patch {
    let mut patch = Patch::new();
    patch
        .set(FeatureKind::TimelessRaster, "LULC", labels().into())
        .unwrap();
    patch
        .set(
            FeatureKind::TemporalRaster,
            "BANDS",
            Array4::<f32>::ones((4, H, W, 2)).into(),
        )
        .unwrap();
    patch
}

fn features() -> Vec<FeatureToSample> {
    vec![
        FeatureToSample::new(FeatureKind::TimelessRaster, "LULC", "LULC_SAMPLED"),
        FeatureToSample::new(FeatureKind::TemporalRaster, "BANDS", "BANDS_SAMPLED"),
    ]
}

fn population(class: i64) -> usize {
    labels().iter().filter(|&&v| v == class).count()
}

fn sampled_classes(patch: &Patch) -> Vec<i64> {
    patch
        .get_array(FeatureKind::TimelessRaster, "LULC_SAMPLED")
        .unwrap()
        .as_int64()
        .unwrap()
        .iter()
        .copied()
        .collect()
}

#[test]
fn test_uniform_fraction_per_class() {
    for fraction in [0.05, 0.1, 0.5] {
        let mut patch = eo_patch();
        let task = FractionSamplingTask::new(features(), "LULC", fraction, false)
            .unwrap()
            .with_exclude_values([0]);
        task.execute(&mut patch, Some(10)).unwrap();
        let classes = sampled_classes(&patch);

        assert!(!classes.contains(&0));
        for class in [1, 2] {
            let n = classes.iter().filter(|&&v| v == class).count() as f64;
            let expected = population(class) as f64 * fraction;
            assert!((n - expected).abs() <= 1.0, "class {class}: {n} vs {expected}");
        }
    }
}

#[test]
fn test_per_class_map() {
    let mut patch = eo_patch();
    let map = BTreeMap::from([(0, 0.01), (2, 0.3), (7, 0.5)]);
    let task = FractionSamplingTask::new(features(), "LULC", map, false)
        .unwrap()
        .with_mask_of_samples("MASK");
    let origins = task.execute(&mut patch, Some(3)).unwrap();
    let classes = sampled_classes(&patch);

    let zeros = classes.iter().filter(|&&v| v == 0).count();
    let twos = classes.iter().filter(|&&v| v == 2).count();
    assert_eq!(zeros, (population(0) as f64 * 0.01).round_ties_even() as usize);
    assert_eq!(twos, (population(2) as f64 * 0.3).round_ties_even() as usize);
    assert!(!classes.contains(&1));
    assert_eq!(origins.len(), zeros + twos);

    let mask = patch.get_array(FeatureKind::TimelessRaster, "MASK").unwrap();
    let marked = mask.as_bool().unwrap().iter().filter(|&&m| m).count();
    assert_eq!(marked, origins.len());
}

#[test]
fn test_without_replacement_points_distinct() {
    let mut patch = eo_patch();
    let task = FractionSamplingTask::new(features(), "LULC", 1.0, false).unwrap();
    let origins = task.execute(&mut patch, Some(8)).unwrap();
    assert_eq!(origins.len(), H * W);
    let mut points: Vec<_> = origins.iter().collect();
    points.sort_unstable();
    points.dedup();
    assert_eq!(points.len(), H * W);
}

#[test]
fn test_with_replacement_allows_oversampling() {
    let mut patch = eo_patch();
    let map = BTreeMap::from([(1, 2.0)]);
    let task = FractionSamplingTask::new(features(), "LULC", map, true).unwrap();
    let origins = task.execute(&mut patch, Some(8)).unwrap();
    assert_eq!(origins.len(), 2 * population(1));
    assert!(sampled_classes(&patch).iter().all(|&v| v == 1));
}

#[test]
fn test_blocks_and_reproducibility() {
    let task = FractionSamplingTask::new(features(), "LULC", 0.02, false)
        .unwrap()
        .with_sample_size((3, 4))
        .with_mask_of_samples("MASK");
    let mut a = eo_patch();
    let mut b = eo_patch();
    let origins = task.execute(&mut a, Some(77)).unwrap();
    task.execute(&mut b, Some(77)).unwrap();
    assert_eq!(a, b);

    let mut c = eo_patch();
    task.execute(&mut c, Some(78)).unwrap();
    assert_ne!(
        a.get_array(FeatureKind::TimelessRaster, "MASK").unwrap(),
        c.get_array(FeatureKind::TimelessRaster, "MASK").unwrap(),
        "different seeds gave the same mask"
    );

    let bands = a.get_array(FeatureKind::TemporalRaster, "BANDS_SAMPLED").unwrap();
    assert_eq!(bands.shape(), &[4, origins.len() * 3, 4, 2]);
    assert!(origins.iter().all(|(r, c)| r + 3 <= H && c + 4 <= W));
}

#[test]
fn test_label_shape_mismatch() {
    let mut patch = eo_patch();
    patch
        .set(
            FeatureKind::TimelessRaster,
            "LULC",
            Array3::<i64>::zeros((H - 1, W, 1)).into(),
        )
        .unwrap();
    let task = FractionSamplingTask::new(
        vec![FeatureToSample::in_place(FeatureKind::TemporalRaster, "BANDS")],
        "LULC",
        0.1,
        false,
    )
    .unwrap();
    let err = task.execute(&mut patch, Some(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

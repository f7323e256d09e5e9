//! Integration tests for uniform block sampling.

use geosample_patch::{FeatureArray, FeatureKind, FeatureStore, Patch};
use geosample_tasks::{Amount, BlockSamplingTask, ErrorKind, FeatureToSample};
use ndarray::{Array3, Array4};

const H: usize = 101;
const W: usize = 100;

fn eo_patch() -> Patch {
    let mut patch = Patch::new();
    let bands = Array4::from_shape_fn((5, H, W, 3), |(t, r, c, b)| {
        (t * 1_000_000 + r * 1000 + c * 10 + b) as f32
    });
    patch.set(FeatureKind::TemporalRaster, "BANDS", bands.into()).unwrap();
    let lulc = Array3::from_shape_fn((H, W, 1), |(r, c, _)| ((r / 10 + c / 10) % 4) as i64);
    patch.set(FeatureKind::TimelessRaster, "LULC", lulc.into()).unwrap();
    patch
}

fn features() -> Vec<FeatureToSample> {
    vec![
        FeatureToSample::new(FeatureKind::TemporalRaster, "BANDS", "BANDS_SAMPLED"),
        FeatureToSample::new(FeatureKind::TimelessRaster, "LULC", "LULC_SAMPLED"),
    ]
}

fn mask(patch: &Patch, name: &str) -> Vec<bool> {
    patch
        .get_array(FeatureKind::TimelessRaster, name)
        .unwrap()
        .as_bool()
        .unwrap()
        .iter()
        .copied()
        .collect()
}

#[test]
fn test_output_shapes_preserve_other_axes() {
    for (n, size) in [(10, (1, 1)), (7, (3, 2)), (1, (101, 100))] {
        let mut patch = eo_patch();
        let task = BlockSamplingTask::new(features(), Amount::Count(n))
            .unwrap()
            .with_sample_size(size);
        task.execute(&mut patch, Some(42)).unwrap();

        let bands = patch
            .get_array(FeatureKind::TemporalRaster, "BANDS_SAMPLED")
            .unwrap();
        assert_eq!(bands.shape(), &[5, n * size.0, size.1, 3]);
        let lulc = patch
            .get_array(FeatureKind::TimelessRaster, "LULC_SAMPLED")
            .unwrap();
        assert_eq!(lulc.shape(), &[n * size.0, size.1, 1]);
        assert_eq!(lulc.dtype(), "i64");
    }
}

#[test]
fn test_sampled_pixels_come_from_block_positions() {
    let mut patch = eo_patch();
    let task = BlockSamplingTask::new(features(), Amount::Count(6))
        .unwrap()
        .with_sample_size((2, 3));
    let origins = task.execute(&mut patch, Some(5)).unwrap();
    let bands = patch
        .get_array(FeatureKind::TemporalRaster, "BANDS_SAMPLED")
        .unwrap()
        .as_float32()
        .unwrap();

    for (k, (r, c)) in origins.iter().enumerate() {
        for dr in 0..2 {
            for dc in 0..3 {
                let expected = (3_000_000 + (r + dr) * 1000 + (c + dc) * 10 + 2) as f32;
                assert_eq!(bands[[3, k * 2 + dr, dc, 2]], expected);
            }
        }
    }
}

#[test]
fn test_mask_is_union_of_blocks() {
    let mut patch = eo_patch();
    let size = (4, 5);
    let task = BlockSamplingTask::new(features(), Amount::Count(30))
        .unwrap()
        .with_sample_size(size)
        .with_mask_of_samples("MASK");
    let origins = task.execute(&mut patch, Some(9)).unwrap();

    let mut expected = vec![false; H * W];
    for (r, c) in origins.iter() {
        for dr in 0..size.0 {
            for dc in 0..size.1 {
                expected[(r + dr) * W + c + dc] = true;
            }
        }
    }
    assert_eq!(mask(&patch, "MASK"), expected);
}

#[test]
fn test_count_output_sums_to_block_pixels() {
    let mut patch = eo_patch();
    let task = BlockSamplingTask::new(features(), Amount::Count(25))
        .unwrap()
        .with_sample_size((3, 3))
        .with_count_of_samples("COUNT");
    task.execute(&mut patch, Some(1)).unwrap();
    let counts = patch.get_array(FeatureKind::TimelessRaster, "COUNT").unwrap();
    let FeatureArray::UInt16(counts) = counts else {
        panic!("count output must be u16");
    };
    assert_eq!(counts.iter().map(|&n| n as usize).sum::<usize>(), 25 * 9);
}

#[test]
fn test_same_seed_same_output() {
    let task = BlockSamplingTask::new(features(), Amount::Fraction(0.01))
        .unwrap()
        .with_sample_size((2, 2))
        .with_mask_of_samples("MASK");

    let mut a = eo_patch();
    let mut b = eo_patch();
    let origins_a = task.execute(&mut a, Some(1234)).unwrap();
    let origins_b = task.execute(&mut b, Some(1234)).unwrap();
    assert_eq!(origins_a, origins_b);
    assert_eq!(a, b);

    let mut c = eo_patch();
    let origins_c = task.execute(&mut c, Some(4321)).unwrap();
    assert_ne!(origins_a, origins_c);
}

#[test]
fn test_fraction_amount_rounds_pixel_count() {
    let mut patch = eo_patch();
    let task = BlockSamplingTask::new(features(), Amount::Fraction(0.1)).unwrap();
    let origins = task.execute(&mut patch, Some(0)).unwrap();
    assert_eq!(origins.len(), 1010);
}

#[test]
fn test_amount_above_origins_is_population_error() {
    let mut patch = eo_patch();
    let task = BlockSamplingTask::new(features(), Amount::Count(H * W + 1)).unwrap();
    let err = task.execute(&mut patch, Some(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Population);
    assert!(!patch.has(FeatureKind::TemporalRaster, "BANDS_SAMPLED"));
}

#[test]
fn test_block_larger_than_raster_is_bounds_error() {
    let mut patch = eo_patch();
    let task = BlockSamplingTask::new(features(), Amount::Count(1))
        .unwrap()
        .with_sample_size((102, 1));
    let err = task.execute(&mut patch, Some(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
}

#[test]
fn test_missing_feature_is_input_error() {
    let mut patch = eo_patch();
    let task = BlockSamplingTask::new(
        vec![FeatureToSample::in_place(FeatureKind::TemporalRaster, "NDVI")],
        Amount::Count(1),
    )
    .unwrap();
    let err = task.execute(&mut patch, Some(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

//! Integration tests for StratifiedError variants.

use geosample_stratified::{SampleSpec, StratifiedError, sample_by_values};
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

#[test]
fn error_absent_value() {
    let image = Array2::<i64>::ones((100, 100));
    let result = sample_by_values(image.view(), &SampleSpec::per_class([(2, 100)]), &mut rng(), false);
    assert!(matches!(
        result,
        Err(StratifiedError::InsufficientPopulation {
            requested: 100,
            available: 0,
            ..
        })
    ));
}

#[test]
fn error_absent_value_with_replacement() {
    let image = Array2::<i64>::ones((10, 10));
    let result = sample_by_values(image.view(), &SampleSpec::per_class([(2, 1)]), &mut rng(), true);
    assert!(matches!(
        result,
        Err(StratifiedError::InsufficientPopulation { available: 0, .. })
    ));
}

#[test]
fn error_more_than_array_size() {
    let image = Array2::<i64>::ones((100, 100));
    let result = sample_by_values(
        image.view(),
        &SampleSpec::per_class([(1, 10_001)]),
        &mut rng(),
        false,
    );
    assert!(matches!(
        result,
        Err(StratifiedError::InsufficientPopulation {
            requested: 10_001,
            available: 10_000,
            ..
        })
    ));
}

#[test]
fn error_nothing_requested() {
    let image = Array2::<i64>::ones((4, 4));
    let result = sample_by_values(image.view(), &SampleSpec::per_class([(1, 0)]), &mut rng(), false);
    assert!(matches!(result, Err(StratifiedError::NoSamplesRequested)));

    let empty: SampleSpec<i64> = SampleSpec::per_class([]);
    let result = sample_by_values(image.view(), &empty, &mut rng(), false);
    assert!(matches!(result, Err(StratifiedError::NoSamplesRequested)));
}

#[test]
fn error_duplicate_value() {
    let image = Array2::<i64>::ones((4, 4));
    let spec = SampleSpec::per_class([(1, 1), (1, 1)]);
    let result = sample_by_values(image.view(), &spec, &mut rng(), false);
    assert!(matches!(result, Err(StratifiedError::DuplicateValue { .. })));
}

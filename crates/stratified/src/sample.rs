//! Position grouping and per-class draws.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use ndarray::ArrayView2;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::StratifiedError;
use crate::result::SampleIndices;
use crate::spec::{SampleSpec, checked_total};

/// Draws `(row, col)` positions from `values` with exact per-class counts.
///
/// Positions of every requested class are collected in one pass over the
/// labels. Each class is then drawn independently: without replacement by a
/// partial shuffle of its positions (taking the first `count`), with
/// replacement by independent uniform picks. The output is grouped by class
/// in the order of the resolved spec.
///
/// # Errors
///
/// - [`StratifiedError::NoSamplesRequested`] if every count is zero.
/// - [`StratifiedError::DuplicateValue`] if a per-class spec repeats a value.
/// - [`StratifiedError::CountOverflow`] if the counts add up past `usize::MAX`.
/// - [`StratifiedError::InsufficientPopulation`] if a class cannot supply its
///   count (without replacement), or is empty (with replacement).
#[tracing::instrument(skip(values, spec, rng), fields(shape = ?values.dim()))]
pub fn sample_by_values<T>(
    values: ArrayView2<'_, T>,
    spec: &SampleSpec<T>,
    rng: &mut impl Rng,
    replace: bool,
) -> Result<SampleIndices, StratifiedError>
where
    T: Copy + Ord + Hash + Debug,
{
    let counts = spec.resolve_counts(&values)?;
    let total = checked_total(&counts).ok_or(StratifiedError::CountOverflow)?;
    let mut groups = group_positions(&values, &counts);

    // Check every class before drawing so a failure consumes no randomness.
    for (value, count) in &counts {
        let available = groups.get(value).map_or(0, Vec::len);
        let short = if replace {
            *count > 0 && available == 0
        } else {
            *count > available
        };
        if short {
            return Err(StratifiedError::InsufficientPopulation {
                value: format!("{value:?}"),
                requested: *count,
                available,
            });
        }
    }

    let n_cols = values.ncols();
    let mut indices = SampleIndices::with_capacity(total.min(values.len()));
    let mut drawn = Vec::new();

    for (value, count) in &counts {
        let Some(positions) = groups.get_mut(value) else {
            continue;
        };
        draw_class(positions, *count, replace, rng, &mut drawn);
        debug!(value = ?value, count, population = positions.len(), "drew class");
        for &flat in &drawn {
            indices.push(flat / n_cols, flat % n_cols);
        }
    }

    Ok(indices)
}

/// Collects the row-major flat positions of every class with a positive count.
fn group_positions<T>(values: &ArrayView2<'_, T>, counts: &[(T, usize)]) -> HashMap<T, Vec<usize>>
where
    T: Copy + Eq + Hash,
{
    let mut groups: HashMap<T, Vec<usize>> = counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(v, _)| (*v, Vec::new()))
        .collect();

    for (flat, value) in values.iter().enumerate() {
        if let Some(bucket) = groups.get_mut(value) {
            bucket.push(flat);
        }
    }
    groups
}

/// Draws `count` entries of `positions` into `out`.
///
/// Reorders `positions` in place when drawing without replacement.
fn draw_class(
    positions: &mut [usize],
    count: usize,
    replace: bool,
    rng: &mut impl Rng,
    out: &mut Vec<usize>,
) {
    out.clear();
    if replace {
        for _ in 0..count {
            out.push(positions[rng.random_range(0..positions.len())]);
        }
    } else {
        let (chosen, _) = positions.partial_shuffle(rng, count);
        out.extend_from_slice(chosen);
    }
}

//! Per-class sample requests.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use ndarray::ArrayView2;

use crate::error::StratifiedError;

/// How many positions to draw per class value.
///
/// # Example
///
/// ```
/// use geosample_stratified::SampleSpec;
///
/// let spec = SampleSpec::per_class([(0, 100), (1, 200), (2, 30)]);
/// assert_eq!(spec.total(), Some(330));
///
/// let uniform: SampleSpec<i64> = SampleSpec::Uniform(10);
/// assert_eq!(uniform.total(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSpec<T> {
    /// Explicit `(value, count)` entries. Output is grouped in this order.
    PerClass(Vec<(T, usize)>),
    /// The same count for every value present in the labels, in ascending
    /// value order.
    Uniform(usize),
}

impl<T> SampleSpec<T> {
    /// Builds a per-class spec from any iterator of `(value, count)` pairs.
    pub fn per_class(entries: impl IntoIterator<Item = (T, usize)>) -> Self {
        Self::PerClass(entries.into_iter().collect())
    }

    /// Returns the total requested count, or `None` for the uniform form
    /// whose total depends on the labels. Also `None` when the counts
    /// overflow `usize`.
    pub fn total(&self) -> Option<usize> {
        match self {
            Self::PerClass(entries) => checked_total(entries),
            Self::Uniform(_) => None,
        }
    }
}

/// Sums the counts of `(value, count)` entries, `None` on overflow.
pub(crate) fn checked_total<T>(counts: &[(T, usize)]) -> Option<usize> {
    counts.iter().try_fold(0usize, |acc, (_, n)| acc.checked_add(*n))
}

impl<T: Copy + Ord + Hash + Debug> SampleSpec<T> {
    /// Resolves the spec against concrete labels into ordered `(value, count)`
    /// entries.
    ///
    /// Rejects repeated values and an all-zero total.
    pub(crate) fn resolve_counts(
        &self,
        values: &ArrayView2<'_, T>,
    ) -> Result<Vec<(T, usize)>, StratifiedError> {
        let counts = match self {
            Self::PerClass(entries) => {
                let mut seen = BTreeSet::new();
                for (value, _) in entries {
                    if !seen.insert(*value) {
                        return Err(StratifiedError::DuplicateValue {
                            value: format!("{value:?}"),
                        });
                    }
                }
                entries.clone()
            }
            Self::Uniform(n) => {
                let present: BTreeSet<T> = values.iter().copied().collect();
                present.into_iter().map(|v| (v, *n)).collect()
            }
        };

        if counts.iter().all(|(_, n)| *n == 0) {
            return Err(StratifiedError::NoSamplesRequested);
        }
        Ok(counts)
    }
}

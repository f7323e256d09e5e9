//! Parallel execution over many patches.

use geosample_patch::FeatureStore;
use geosample_stratified::SampleIndices;
use rayon::prelude::*;
use tracing::info;

use crate::error::SamplingError;
use crate::task::SamplingTask;

/// Runs `task` on every store in parallel.
///
/// Store `i` is sampled with seed `seed + i` (wrapping), so each result is
/// the same as running the task on that store alone with that seed. With
/// `seed == None` every store gets an independent OS-seeded generator.
/// One result is returned per store, in input order.
pub fn execute_many<S: FeatureStore + Send>(
    task: &SamplingTask,
    stores: &mut [S],
    seed: Option<u64>,
) -> Vec<Result<SampleIndices, SamplingError>> {
    info!(method = task.method(), n_stores = stores.len(), "sampling batch");
    stores
        .par_iter_mut()
        .enumerate()
        .map(|(i, store)| task.execute(store, seed.map(|s| s.wrapping_add(i as u64))))
        .collect()
}

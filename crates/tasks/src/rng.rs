//! Seeded generator construction.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds the generator for one task run.
///
/// The same seed always yields the same stream; `None` seeds from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use trial_core::model::{TaskGroup, TaskItem};

use crate::error::SampleError;

/// Draws shuffled subsets of a task group.
///
/// Shuffles a copy of the group's tasks (Fisher-Yates via `SliceRandom`) and keeps
/// the first `n`, which is sampling without replacement. The source group is never
/// touched.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Sampler seeded from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Sampler producing a reproducible sequence of orders.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Returns `n` distinct tasks from `group` in random order.
    ///
    /// # Errors
    ///
    /// Returns `SampleError::OutOfRange` unless `1 <= n <= group.len()`.
    pub fn sample(&mut self, group: &TaskGroup, n: usize) -> Result<Vec<TaskItem>, SampleError> {
        if n == 0 || n > group.len() {
            return Err(SampleError::OutOfRange {
                requested: n,
                available: group.len(),
            });
        }

        let mut items = group.tasks().to_vec();
        items.as_mut_slice().shuffle(&mut self.rng);
        items.truncate(n);
        Ok(items)
    }
}

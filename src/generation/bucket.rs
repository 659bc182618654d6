//! Random bucket synthesis.
//!
//! # Distributions
//!
//! | Quantity | Distribution |
//! |----------|--------------|
//! | Capacity | `U[0, 1) * max_capacity` |
//! | Task count | uniform integer in `[lo, hi)`, or exactly `lo` when `lo == hi` |
//! | Consumption | `U[0, 1) * max_consumption` |
//!
//! Draw order is capacity, then task count, then one consumption per task,
//! so a fixed seed and request order reproduce identical buckets.

use std::ops::Range;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::models::{Bucket, Label};
use crate::GridConfig;

/// Synthesizes buckets with random capacity and tasks.
#[derive(Debug, Clone)]
pub struct BucketGenerator<R = SmallRng> {
    rng: R,
    task_range: Range<usize>,
    max_capacity: f64,
    max_consumption: f64,
}

impl BucketGenerator<SmallRng> {
    /// Creates a generator from configuration.
    ///
    /// Uses `config.seed` when present, otherwise seeds from the thread RNG.
    /// Fails with [`GridError::InvalidConfig`](crate::GridError::InvalidConfig)
    /// when the configuration does not validate.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a seeded generator with default distributions.
    pub fn seeded(seed: u64) -> Self {
        Self::unchecked(&GridConfig::default(), SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BucketGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn with_rng(config: &GridConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::unchecked(config, rng))
    }

    // Callers guarantee `config` validates.
    fn unchecked(config: &GridConfig, rng: R) -> Self {
        Self {
            rng,
            task_range: config.task_range(),
            max_capacity: config.max_capacity,
            max_consumption: config.max_consumption,
        }
    }

    /// Effective task count range.
    pub fn task_range(&self) -> Range<usize> {
        self.task_range.clone()
    }

    /// Synthesizes a bucket for the given label pair.
    pub fn generate(&mut self, row: &Label, column: &Label) -> Bucket {
        let capacity = self.rng.random::<f64>() * self.max_capacity;
        let mut bucket = Bucket::new(row.clone(), column.clone(), capacity);

        let count = self.task_count();
        bucket.tasks.reserve_exact(count);
        for _ in 0..count {
            let consumption = self.rng.random::<f64>() * self.max_consumption;
            bucket.push_task(consumption);
        }

        bucket
    }

    fn task_count(&mut self) -> usize {
        if self.task_range.is_empty() {
            self.task_range.start
        } else {
            self.rng.random_range(self.task_range.clone())
        }
    }
}

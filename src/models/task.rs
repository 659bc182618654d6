//! Task model.
//!
//! A task is one unit of demand inside a bucket. It consumes part of the
//! bucket's capacity; nothing limits the sum of consumptions to the
//! capacity, so a bucket may be over-subscribed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Bucket, CellKey};

/// A unit of demand belonging to exactly one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Sequence number, unique within the owning bucket only (0-based).
    pub id: usize,
    /// Key of the owning bucket (non-owning back-reference).
    pub bucket: CellKey,
    /// Consumed capacity units, in `[0, max_consumption)`.
    pub consumption: f64,
}

impl Task {
    /// Creates a new task.
    pub fn new(id: usize, bucket: CellKey, consumption: f64) -> Self {
        Self {
            id,
            bucket,
            consumption,
        }
    }

    /// Whether this task belongs to `bucket`.
    pub fn belongs_to(&self, bucket: &Bucket) -> bool {
        self.bucket == bucket.key
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Task {}", self.id)
    }
}

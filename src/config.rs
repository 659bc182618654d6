//! Data source configuration.
//!
//! All fields have defaults matching the million-by-million demo grid, so
//! `GridConfig::default()` (or an empty serialized object) is a complete
//! configuration.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::generation::{COLUMN_PREFIX, ROW_PREFIX};
use crate::validation::{validate_config, ValidationResult};

/// Default number of row labels.
pub const DEFAULT_ROW_COUNT: usize = 1_000_000;
/// Default number of column labels.
pub const DEFAULT_COLUMN_COUNT: usize = 1_000_000;
/// Default lower bound on tasks per bucket (inclusive).
pub const DEFAULT_MIN_TASKS_PER_BUCKET: usize = 50;
/// Default upper bound on tasks per bucket (exclusive).
pub const DEFAULT_MAX_TASKS_PER_BUCKET: usize = 100;
/// Largest accepted task count bound.
pub const MAX_TASKS_PER_BUCKET: usize = 1 << 20;
/// Default capacity scale: capacities fall in `[0, 100)`.
pub const DEFAULT_MAX_CAPACITY: f64 = 100.0;
/// Default consumption scale: consumptions fall in `[0, 10)`.
pub const DEFAULT_MAX_CONSUMPTION: f64 = 10.0;

/// Configuration for a [`GridDataSource`](crate::source::GridDataSource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of row labels to generate.
    pub row_count: usize,
    /// Number of column labels to generate.
    pub column_count: usize,
    /// Row label prefix ("Workplace" → "Workplace 1", ...).
    pub row_prefix: String,
    /// Column label prefix ("Day" → "Day 1", ...).
    pub column_prefix: String,
    /// One bound of the per-bucket task count range.
    pub min_tasks_per_bucket: usize,
    /// The other bound of the per-bucket task count range.
    pub max_tasks_per_bucket: usize,
    /// Upper (exclusive) bound of bucket capacity.
    pub max_capacity: f64,
    /// Upper (exclusive) bound of task consumption.
    pub max_consumption: f64,
    /// RNG seed. `None` = seeded from the thread RNG (non-reproducible).
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            column_count: DEFAULT_COLUMN_COUNT,
            row_prefix: ROW_PREFIX.to_string(),
            column_prefix: COLUMN_PREFIX.to_string(),
            min_tasks_per_bucket: DEFAULT_MIN_TASKS_PER_BUCKET,
            max_tasks_per_bucket: DEFAULT_MAX_TASKS_PER_BUCKET,
            max_capacity: DEFAULT_MAX_CAPACITY,
            max_consumption: DEFAULT_MAX_CONSUMPTION,
            seed: None,
        }
    }
}

impl GridConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both axis sizes.
    pub fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.row_count = rows;
        self.column_count = columns;
        self
    }

    /// Sets the label prefixes.
    pub fn with_prefixes(mut self, row: impl Into<String>, column: impl Into<String>) -> Self {
        self.row_prefix = row.into();
        self.column_prefix = column.into();
        self
    }

    /// Sets the task count bounds (order-insensitive, at most
    /// [`MAX_TASKS_PER_BUCKET`]).
    pub fn with_task_range(mut self, min: usize, max: usize) -> Self {
        self.min_tasks_per_bucket = min;
        self.max_tasks_per_bucket = max;
        self
    }

    /// Sets the capacity scale.
    pub fn with_max_capacity(mut self, max_capacity: f64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets the consumption scale.
    pub fn with_max_consumption(mut self, max_consumption: f64) -> Self {
        self.max_consumption = max_consumption;
        self
    }

    /// Fixes the RNG seed for reproducible generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective task count range `[lo, hi)`.
    ///
    /// Bounds are normalized so swapped values still work. When both bounds
    /// are equal the range is empty and callers use `lo` as the exact count.
    pub fn task_range(&self) -> Range<usize> {
        let lo = self.min_tasks_per_bucket.min(self.max_tasks_per_bucket);
        let hi = self.min_tasks_per_bucket.max(self.max_tasks_per_bucket);
        lo..hi
    }

    /// Checks the configuration, reporting every problem found.
    pub fn validate(&self) -> ValidationResult {
        validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GridConfig::default();
        assert_eq!(c.row_count, 1_000_000);
        assert_eq!(c.column_count, 1_000_000);
        assert_eq!(c.row_prefix, "Workplace");
        assert_eq!(c.column_prefix, "Day");
        assert_eq!(c.task_range(), 50..100);
        assert!((c.max_capacity - 100.0).abs() < 1e-10);
        assert!((c.max_consumption - 10.0).abs() < 1e-10);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = GridConfig::new()
            .with_size(3, 2)
            .with_prefixes("Line", "Shift")
            .with_task_range(5, 8)
            .with_max_capacity(20.0)
            .with_max_consumption(2.0)
            .with_seed(42);

        assert_eq!(c.row_count, 3);
        assert_eq!(c.column_count, 2);
        assert_eq!(c.row_prefix, "Line");
        assert_eq!(c.column_prefix, "Shift");
        assert_eq!(c.task_range(), 5..8);
        assert_eq!(c.seed, Some(42));
    }

    #[test]
    fn test_task_range_swapped_bounds() {
        let c = GridConfig::new().with_task_range(100, 50);
        assert_eq!(c.task_range(), 50..100);
    }

    #[test]
    fn test_deserialize_partial() {
        let c: GridConfig =
            serde_json::from_str(r#"{"row_count": 10, "seed": 7}"#).unwrap();
        assert_eq!(c.row_count, 10);
        assert_eq!(c.column_count, DEFAULT_COLUMN_COUNT);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.column_prefix, "Day");
    }
}

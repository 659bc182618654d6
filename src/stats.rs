//! Bucket load and cache metrics.
//!
//! Observational only: over-subscribed buckets are reported, never
//! rejected or rebalanced.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total consumption | Sum of task consumptions in a bucket |
//! | Utilization | Total consumption / capacity |
//! | Over-subscribed | Total consumption > capacity |
//! | Hit rate | Cache hits / (hits + misses) |

use serde::{Deserialize, Serialize};

use crate::models::Bucket;

/// Load indicators of one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketLoad {
    /// Bucket capacity.
    pub capacity: f64,
    /// Sum of task consumptions.
    pub total_consumption: f64,
    /// Consumption / capacity. Infinite for a zero-capacity bucket with demand.
    pub utilization: f64,
    /// Number of tasks.
    pub task_count: usize,
}

impl BucketLoad {
    /// Computes load indicators for a bucket.
    pub fn of(bucket: &Bucket) -> Self {
        let total_consumption = bucket.total_consumption();
        let utilization = if bucket.capacity > 0.0 {
            total_consumption / bucket.capacity
        } else if total_consumption > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };

        Self {
            capacity: bucket.capacity,
            total_consumption,
            utilization,
            task_count: bucket.task_count(),
        }
    }

    /// Whether demand exceeds capacity.
    pub fn is_oversubscribed(&self) -> bool {
        self.total_consumption > self.capacity
    }

    /// Capacity left over (negative when over-subscribed).
    pub fn headroom(&self) -> f64 {
        self.capacity - self.total_consumption
    }
}

/// Counters describing a bucket cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Distinct buckets held.
    pub buckets: usize,
    /// Tasks held across all buckets.
    pub tasks: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that created a bucket.
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache (0.0 when none).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;

    fn make_bucket(capacity: f64, consumptions: &[f64]) -> Bucket {
        let mut b = Bucket::new(Label::new(0, "Workplace 1"), Label::new(0, "Day 1"), capacity);
        for &c in consumptions {
            b.push_task(c);
        }
        b
    }

    #[test]
    fn test_load_under_capacity() {
        let load = BucketLoad::of(&make_bucket(10.0, &[2.0, 3.0]));
        assert_eq!(load.task_count, 2);
        assert!((load.total_consumption - 5.0).abs() < 1e-10);
        assert!((load.utilization - 0.5).abs() < 1e-10);
        assert!((load.headroom() - 5.0).abs() < 1e-10);
        assert!(!load.is_oversubscribed());
    }

    #[test]
    fn test_load_oversubscribed() {
        let load = BucketLoad::of(&make_bucket(4.0, &[3.0, 3.0]));
        assert!(load.is_oversubscribed());
        assert!((load.utilization - 1.5).abs() < 1e-10);
        assert!(load.headroom() < 0.0);
    }

    #[test]
    fn test_load_zero_capacity() {
        let empty = BucketLoad::of(&make_bucket(0.0, &[]));
        assert!((empty.utilization - 0.0).abs() < 1e-10);
        assert!(!empty.is_oversubscribed());

        let loaded = BucketLoad::of(&make_bucket(0.0, &[1.0]));
        assert!(loaded.utilization.is_infinite());
        assert!(loaded.is_oversubscribed());
    }

    #[test]
    fn test_hit_rate() {
        assert!((CacheStats::default().hit_rate() - 0.0).abs() < 1e-10);
        let stats = CacheStats {
            buckets: 2,
            tasks: 100,
            hits: 6,
            misses: 2,
        };
        assert!((stats.hit_rate() - 0.75).abs() < 1e-10);
    }
}

//! Single-owner bucket cache.

use std::collections::HashMap;
use std::sync::Arc;

use super::{BucketStore, Resolved};
use crate::generation::BucketGenerator;
use crate::models::{Bucket, CellKey, Label};
use crate::error::Result;
use crate::stats::CacheStats;
use crate::GridConfig;

/// Bucket cache for a single-threaded host.
///
/// # Example
///
/// ```
/// use u_bucket_grid::cache::{BucketCache, BucketStore};
/// use u_bucket_grid::generation::{generate_columns, generate_rows};
/// use std::sync::Arc;
///
/// let rows = generate_rows(3);
/// let cols = generate_columns(2);
/// let mut cache = BucketCache::seeded(42);
///
/// let first = cache.resolve(rows.labels(), cols.labels());
/// let second = cache.resolve(rows.labels(), cols.labels());
/// assert_eq!(first.len(), 6);
/// assert!(first.iter().zip(&second).all(|(a, b)| Arc::ptr_eq(a, b)));
/// assert_eq!(cache.len(), 6);
/// ```
#[derive(Debug)]
pub struct BucketCache {
    buckets: HashMap<CellKey, Arc<Bucket>>,
    generator: BucketGenerator,
    tasks: usize,
    hits: u64,
    misses: u64,
}

impl BucketCache {
    /// Creates an empty cache.
    pub fn new(generator: BucketGenerator) -> Self {
        Self {
            buckets: HashMap::new(),
            generator,
            tasks: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Creates an empty cache from configuration, rejecting an invalid one.
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        BucketGenerator::from_config(config).map(Self::new)
    }

    /// Creates an empty cache with a seeded generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(BucketGenerator::seeded(seed))
    }

    /// Iterates cached buckets in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Bucket>> {
        self.buckets.values()
    }
}

impl BucketStore for BucketCache {
    fn get_or_create(&mut self, row: &Label, column: &Label) -> Resolved {
        let key = CellKey::of(row, column);
        if let Some(bucket) = self.buckets.get(&key) {
            self.hits += 1;
            return Resolved {
                bucket: Arc::clone(bucket),
                created: false,
            };
        }

        let bucket = Arc::new(self.generator.generate(row, column));
        tracing::trace!(
            row = %row,
            column = %column,
            capacity = bucket.capacity,
            tasks = bucket.task_count(),
            "bucket created"
        );
        self.misses += 1;
        self.tasks += bucket.task_count();
        self.buckets.insert(key, Arc::clone(&bucket));

        Resolved {
            bucket,
            created: true,
        }
    }

    fn get(&self, key: CellKey) -> Option<Arc<Bucket>> {
        self.buckets.get(&key).cloned()
    }

    fn len(&self) -> usize {
        self.buckets.len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            buckets: self.buckets.len(),
            tasks: self.tasks,
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{generate_columns, generate_rows};

    #[test]
    fn test_creates_once_per_pair() {
        let rows = generate_rows(2);
        let cols = generate_columns(2);
        let mut cache = BucketCache::seeded(1);
        let (r, c) = (rows.get(0).unwrap(), cols.get(1).unwrap());

        let first = cache.get_or_create(r, c);
        let second = cache.get_or_create(r, c);
        assert!(first.created);
        assert!(!second.created);
        assert!(Arc::ptr_eq(&first.bucket, &second.bucket));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_resolve_row_major() {
        let rows = generate_rows(2);
        let cols = generate_columns(3);
        let mut cache = BucketCache::seeded(2);

        let out = cache.resolve(rows.labels(), cols.labels());
        let keys: Vec<CellKey> = out.iter().map(|b| b.key).collect();
        assert_eq!(
            keys,
            vec![
                CellKey::new(0, 0),
                CellKey::new(0, 1),
                CellKey::new(0, 2),
                CellKey::new(1, 0),
                CellKey::new(1, 1),
                CellKey::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_resolve_repeated_label_once() {
        let rows = generate_rows(2);
        let cols = generate_columns(1);
        let mut cache = BucketCache::seeded(6);
        let r0 = rows.get(0).unwrap().clone();

        let out = cache.resolve(&[r0.clone(), r0], cols.labels());
        assert_eq!(out.len(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_get_without_create() {
        let rows = generate_rows(1);
        let cols = generate_columns(1);
        let mut cache = BucketCache::seeded(3);
        assert!(cache.get(CellKey::new(0, 0)).is_none());
        assert!(cache.is_empty());

        let created = cache.get_or_create(rows.get(0).unwrap(), cols.get(0).unwrap());
        let fetched = cache.get(CellKey::new(0, 0)).unwrap();
        assert!(Arc::ptr_eq(&created.bucket, &fetched));
    }

    #[test]
    fn test_stats_counters() {
        let rows = generate_rows(2);
        let cols = generate_columns(1);
        let mut cache = BucketCache::seeded(4);

        let out = cache.resolve(rows.labels(), cols.labels());
        cache.resolve(rows.labels(), cols.labels());

        let stats = cache.stats();
        assert_eq!(stats.buckets, 2);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.tasks, out.iter().map(|b| b.task_count()).sum::<usize>());
        assert_eq!(cache.iter().count(), 2);
    }

    #[test]
    fn test_from_config_validates() {
        let bad = GridConfig::new().with_max_capacity(f64::NAN);
        assert!(BucketCache::from_config(&bad).is_err());

        let mut cache = BucketCache::from_config(&GridConfig::new().with_seed(8)).unwrap();
        let rows = generate_rows(1);
        let cols = generate_columns(1);
        assert_eq!(cache.resolve(rows.labels(), cols.labels()).len(), 1);
    }

    #[test]
    fn test_empty_request() {
        let cols = generate_columns(3);
        let mut cache = BucketCache::seeded(5);
        assert!(cache.resolve(&[], cols.labels()).is_empty());
        assert!(cache.is_empty());
    }
}

//! Thread-safe bucket cache.
//!
//! # Concurrency
//!
//! Buckets live in a [`DashMap`] with shard-level locking. Creation goes
//! through the entry API: the shard stays write-locked from the vacancy
//! check to the insert, so two threads racing on the same unseen pair
//! produce one bucket. The generator sits behind its own mutex, always
//! taken after the shard lock and never the other way around.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;

use super::{distinct, BucketStore, Resolved};
use crate::generation::BucketGenerator;
use crate::models::{Bucket, CellKey, Label};
use crate::error::Result;
use crate::stats::CacheStats;
use crate::GridConfig;

/// Bucket cache that can be shared between threads.
#[derive(Debug)]
pub struct ConcurrentBucketCache {
    buckets: DashMap<CellKey, Arc<Bucket>>,
    generator: Mutex<BucketGenerator>,
    tasks: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ConcurrentBucketCache {
    /// Creates an empty cache.
    pub fn new(generator: BucketGenerator) -> Self {
        Self {
            buckets: DashMap::new(),
            generator: Mutex::new(generator),
            tasks: AtomicUsize::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
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

    /// Returns the bucket for a label pair, creating it if absent.
    pub fn get_or_create_shared(&self, row: &Label, column: &Label) -> Resolved {
        let key = CellKey::of(row, column);

        // Fast path: read lock only
        if let Some(bucket) = self.buckets.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Resolved {
                bucket: Arc::clone(bucket.value()),
                created: false,
            };
        }

        match self.buckets.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Resolved {
                    bucket: Arc::clone(entry.get()),
                    created: false,
                }
            }
            Entry::Vacant(entry) => {
                let bucket = Arc::new(self.generator.lock().generate(row, column));
                tracing::trace!(
                    row = %row,
                    column = %column,
                    capacity = bucket.capacity,
                    tasks = bucket.task_count(),
                    "bucket created"
                );
                self.misses.fetch_add(1, Ordering::Relaxed);
                self.tasks.fetch_add(bucket.task_count(), Ordering::Relaxed);
                entry.insert(Arc::clone(&bucket));
                Resolved {
                    bucket,
                    created: true,
                }
            }
        }
    }

    /// Resolves every pair of distinct `rows × columns` through a shared
    /// reference.
    pub fn resolve_shared(&self, rows: &[Label], columns: &[Label]) -> Vec<Arc<Bucket>> {
        let (rows, columns) = (distinct(rows), distinct(columns));
        let mut out = Vec::with_capacity(rows.len() * columns.len());
        for row in &rows {
            for column in &columns {
                out.push(self.get_or_create_shared(row, column).bucket);
            }
        }
        out
    }
}

impl BucketStore for ConcurrentBucketCache {
    fn get_or_create(&mut self, row: &Label, column: &Label) -> Resolved {
        self.get_or_create_shared(row, column)
    }

    fn get(&self, key: CellKey) -> Option<Arc<Bucket>> {
        self.buckets.get(&key).map(|b| Arc::clone(b.value()))
    }

    fn len(&self) -> usize {
        self.buckets.len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            buckets: self.buckets.len(),
            tasks: self.tasks.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{generate_columns, generate_rows};
    use crate::MAX_TASKS_PER_BUCKET;
    use std::thread;

    #[test]
    fn test_shared_resolve_idempotent() {
        let rows = generate_rows(3);
        let cols = generate_columns(2);
        let cache = ConcurrentBucketCache::seeded(9);

        let first = cache.resolve_shared(rows.labels(), cols.labels());
        let second = cache.resolve_shared(rows.labels(), cols.labels());
        assert_eq!(first.len(), 6);
        assert!(first.iter().zip(&second).all(|(a, b)| Arc::ptr_eq(a, b)));
        assert_eq!(BucketStore::len(&cache), 6);
    }

    #[test]
    fn test_shared_resolve_collapses_repeats() {
        let rows = generate_rows(2);
        let cols = generate_columns(2);
        let cache = ConcurrentBucketCache::seeded(12);
        let r0 = rows.get(0).unwrap().clone();
        let c1 = cols.get(1).unwrap().clone();

        let out = cache.resolve_shared(&[r0.clone(), r0], &[c1.clone(), c1.clone(), c1]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].key, CellKey::new(0, 1));
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_concurrent_same_pair_creates_once() {
        let rows = generate_rows(4);
        let cols = generate_columns(4);
        let cache = ConcurrentBucketCache::seeded(10);

        let (cache_ref, row_labels, col_labels) = (&cache, rows.labels(), cols.labels());
        let results: Vec<Vec<Arc<Bucket>>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || cache_ref.resolve_shared(row_labels, col_labels)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(BucketStore::len(&cache), 16);
        let stats = cache.stats();
        assert_eq!(stats.misses, 16);
        assert_eq!(stats.hits, 16 * 7);
        for other in &results[1..] {
            assert!(results[0].iter().zip(other).all(|(a, b)| Arc::ptr_eq(a, b)));
        }
    }

    #[test]
    fn test_from_config_validates() {
        let bad = GridConfig::new().with_task_range(MAX_TASKS_PER_BUCKET + 1, 0);
        assert!(ConcurrentBucketCache::from_config(&bad).is_err());
        assert!(ConcurrentBucketCache::from_config(&GridConfig::new()).is_ok());
    }

    #[test]
    fn test_store_trait_delegates() {
        let rows = generate_rows(1);
        let cols = generate_columns(1);
        let mut cache = ConcurrentBucketCache::seeded(11);
        let (r, c) = (rows.get(0).unwrap(), cols.get(0).unwrap());

        let created = cache.get_or_create(r, c);
        assert!(created.created);
        let fetched = BucketStore::get(&cache, CellKey::new(0, 0)).unwrap();
        assert!(Arc::ptr_eq(&created.bucket, &fetched));
    }
}

//! Lazy, memoized bucket storage.
//!
//! A bucket store maps each (row, column) identity pair to exactly one
//! [`Bucket`], synthesizing it on first request and returning the same
//! `Arc` on every later request. Entries are never evicted or updated.
//!
//! # Implementations
//!
//! - **`BucketCache`**: single-owner map, for a host that calls from one
//!   thread (the usual UI event loop).
//! - **`ConcurrentBucketCache`**: sharded map with insert-if-absent, safe to
//!   share across threads (e.g., a server-side virtualization backend).
//!
//! # Traversal
//!
//! [`BucketStore::resolve`] walks rows outer, columns inner. Order only
//! affects the sequence of the output, never which buckets exist. Requests
//! are sets: a label repeated in the input is resolved once, at its first
//! position.

mod concurrent;
mod local;

pub use concurrent::ConcurrentBucketCache;
pub use local::BucketCache;

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{Bucket, CellKey, Label};
use crate::stats::CacheStats;

/// Outcome of a single cell lookup.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The cell's bucket.
    pub bucket: Arc<Bucket>,
    /// Whether this lookup created the bucket.
    pub created: bool,
}

/// Storage of lazily created buckets keyed by cell identity.
///
/// Implementations must create at most one bucket per [`CellKey`].
/// Membership of labels in an axis is not checked here; callers validate
/// against the axes before resolving.
pub trait BucketStore {
    /// Returns the bucket for a label pair, creating it if absent.
    fn get_or_create(&mut self, row: &Label, column: &Label) -> Resolved;

    /// Returns the bucket for a key without creating it.
    fn get(&self, key: CellKey) -> Option<Arc<Bucket>>;

    /// Number of buckets held.
    fn len(&self) -> usize;

    /// Cache counters.
    fn stats(&self) -> CacheStats;

    /// Whether no bucket has been created yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves every pair of distinct `rows × columns`, rows outer.
    fn resolve(&mut self, rows: &[Label], columns: &[Label]) -> Vec<Arc<Bucket>> {
        let (rows, columns) = (distinct(rows), distinct(columns));
        let mut out = Vec::with_capacity(rows.len() * columns.len());
        for row in &rows {
            for column in &columns {
                out.push(self.get_or_create(row, column).bucket);
            }
        }
        out
    }
}

/// Labels with repeated indices removed, first occurrence kept.
pub(crate) fn distinct(labels: &[Label]) -> Vec<&Label> {
    let mut seen = HashSet::with_capacity(labels.len());
    labels.iter().filter(|l| seen.insert(l.index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let a = Label::new(2, "Day 3");
        let b = Label::new(0, "Day 1");
        let labels = [a.clone(), b.clone(), a.clone(), b];
        let kept: Vec<usize> = distinct(&labels).iter().map(|l| l.index).collect();
        assert_eq!(kept, vec![2, 0]);
        assert!(distinct(&[]).is_empty());
    }
}

//! Bucket model.
//!
//! A bucket is the scheduling unit at the intersection of one row label and
//! one column label. It holds a fixed capacity and the tasks competing for
//! it. Buckets are created once, by the cache, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Label, Task};

/// Identity-pair key of a grid cell: (row index, column index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    /// 0-based row index.
    pub row: usize,
    /// 0-based column index.
    pub column: usize,
}

impl CellKey {
    /// Creates a key.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Key for a (row, column) label pair.
    pub fn of(row: &Label, column: &Label) -> Self {
        Self::new(row.index, column.index)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A capacity-bearing bucket at one (row, column) intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Cell key (row index, column index).
    pub key: CellKey,
    /// Row label (back-reference into the row axis).
    pub row: Label,
    /// Column label (back-reference into the column axis).
    pub column: Label,
    /// Capacity, fixed at creation, in `[0, max_capacity)`.
    pub capacity: f64,
    /// Owned tasks, in creation order.
    pub tasks: Vec<Task>,
}

impl Bucket {
    /// Creates an empty bucket for a label pair.
    pub fn new(row: Label, column: Label, capacity: f64) -> Self {
        Self {
            key: CellKey::of(&row, &column),
            row,
            column,
            capacity,
            tasks: Vec::new(),
        }
    }

    /// Appends a task with the next sequence number.
    pub(crate) fn push_task(&mut self, consumption: f64) {
        self.tasks.push(Task::new(self.tasks.len(), self.key, consumption));
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Sum of task consumptions. May exceed `capacity`.
    pub fn total_consumption(&self) -> f64 {
        self.tasks.iter().map(|t| t.consumption).sum()
    }

    /// Task by its sequence number.
    pub fn task(&self, id: usize) -> Option<&Task> {
        self.tasks.get(id)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tasks.len() > 1 {
            write!(f, "{} tasks", self.tasks.len())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bucket() -> Bucket {
        Bucket::new(Label::new(2, "Workplace 3"), Label::new(5, "Day 6"), 40.0)
    }

    #[test]
    fn test_bucket_key_from_labels() {
        let bucket = make_bucket();
        assert_eq!(bucket.key, CellKey::new(2, 5));
        assert_eq!(bucket.key.to_string(), "(2, 5)");
    }

    #[test]
    fn test_push_task_sequence() {
        let mut bucket = make_bucket();
        bucket.push_task(1.0);
        bucket.push_task(2.5);
        bucket.push_task(0.5);

        assert_eq!(bucket.task_count(), 3);
        let ids: Vec<usize> = bucket.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(bucket.tasks.iter().all(|t| t.belongs_to(&bucket)));
        assert!((bucket.total_consumption() - 4.0).abs() < 1e-10);
        assert_eq!(bucket.task(1).unwrap().id, 1);
        assert!(bucket.task(3).is_none());
    }

    #[test]
    fn test_bucket_display() {
        let mut bucket = make_bucket();
        assert_eq!(bucket.to_string(), "");
        bucket.push_task(1.0);
        assert_eq!(bucket.to_string(), "");
        bucket.push_task(1.0);
        assert_eq!(bucket.to_string(), "2 tasks");
    }
}

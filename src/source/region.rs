//! Visible regions and the sinks that collect their content.

use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;

use crate::cache::distinct;
use crate::models::{Axis, Bucket, CellKey, Label, Task};

/// Collector the host provides for one region population.
///
/// Receives each bucket followed by that bucket's tasks, in row-major
/// order. Sinks are append-only.
pub trait RegionSink {
    /// Receives a resolved bucket.
    fn add_bucket(&mut self, bucket: &Arc<Bucket>);

    /// Receives one task of the most recently added bucket.
    fn add_task(&mut self, task: &Task);
}

/// The rows and columns a host currently needs populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRegion {
    /// Visible row labels.
    pub rows: Vec<Label>,
    /// Visible column labels.
    pub columns: Vec<Label>,
}

impl VisibleRegion {
    /// Creates a region from explicit label sets.
    pub fn new(rows: Vec<Label>, columns: Vec<Label>) -> Self {
        Self { rows, columns }
    }

    /// Region for a scrolled viewport.
    ///
    /// Ranges are clamped to the axis lengths, so a viewport hanging past
    /// the end of an axis yields only the labels that exist.
    pub fn window(
        row_axis: &Axis,
        rows: Range<usize>,
        column_axis: &Axis,
        columns: Range<usize>,
    ) -> Self {
        Self {
            rows: clamp(row_axis, rows).to_vec(),
            columns: clamp(column_axis, columns).to_vec(),
        }
    }

    /// Number of (row, column) pairs, counting duplicate labels once.
    pub fn cell_count(&self) -> usize {
        distinct(&self.rows).len() * distinct(&self.columns).len()
    }

    /// Whether the region holds no cell.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

fn clamp(axis: &Axis, range: Range<usize>) -> &[Label] {
    let end = range.end.min(axis.len());
    let start = range.start.min(end);
    &axis.labels()[start..end]
}

/// Default sink: everything emitted, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RegionContent {
    /// Buckets in row-major order.
    pub buckets: Vec<Arc<Bucket>>,
    /// Tasks, grouped by bucket in the same order.
    pub tasks: Vec<Task>,
}

impl RegionContent {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket for a cell, if it was emitted.
    pub fn bucket(&self, key: CellKey) -> Option<&Arc<Bucket>> {
        self.buckets.iter().find(|b| b.key == key)
    }

    /// Tasks emitted for a cell.
    pub fn tasks_of(&self, key: CellKey) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.bucket == key)
    }
}

impl RegionSink for RegionContent {
    fn add_bucket(&mut self, bucket: &Arc<Bucket>) {
        self.buckets.push(Arc::clone(bucket));
    }

    fn add_task(&mut self, task: &Task) {
        self.tasks.push(task.clone());
    }
}

/// Counts from one region population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    /// Buckets emitted.
    pub buckets: usize,
    /// Tasks emitted.
    pub tasks: usize,
    /// Buckets created by this call (cache misses).
    pub created: usize,
}

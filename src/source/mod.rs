//! Host-facing data source.
//!
//! A virtualizing grid host talks to the data source through three calls:
//!
//! 1. [`GridDataSource::row_axis`] and [`GridDataSource::column_axis`],
//!    once at startup, to size headers and scrollbars.
//! 2. [`GridDataSource::populate_visible_region`], whenever the visible
//!    rectangle changes, to receive buckets and tasks through a sink.
//!
//! plus the static [`BucketDescriptor`] / [`TaskDescriptor`] member
//! mappings.
//!
//! # Usage
//!
//! ```
//! use u_bucket_grid::{GridConfig, GridDataSource};
//! use u_bucket_grid::source::VisibleRegion;
//!
//! let config = GridConfig::new().with_size(100, 30).with_seed(42);
//! let mut source = GridDataSource::new(config).unwrap();
//!
//! let region = VisibleRegion::window(source.row_axis(), 0..3, source.column_axis(), 0..2);
//! let content = source.load_region(&region).unwrap();
//! assert_eq!(content.buckets.len(), 6);
//! ```

mod region;

pub use region::{RegionContent, RegionSink, RegionSummary, VisibleRegion};

use crate::cache::{distinct, BucketCache, BucketStore};
use crate::descriptor::{BucketDescriptor, TaskDescriptor};
use crate::error::{GridError, Result};
use crate::generation::AxisGenerator;
use crate::models::{Axis, AxisKind, Label};
use crate::stats::CacheStats;
use crate::validation::{self, ValidationResult};
use crate::GridConfig;

/// Two label axes plus an on-demand bucket populator.
#[derive(Debug)]
pub struct GridDataSource<S = BucketCache> {
    config: GridConfig,
    rows: Axis,
    columns: Axis,
    store: S,
    bucket_descriptor: BucketDescriptor,
    task_descriptor: TaskDescriptor,
}

impl GridDataSource<BucketCache> {
    /// Builds a data source with a single-threaded cache.
    pub fn new(config: GridConfig) -> Result<Self> {
        let store = BucketCache::from_config(&config)?;
        Self::with_store(config, store)
    }
}

impl<S: BucketStore> GridDataSource<S> {
    /// Builds a data source over a caller-supplied store.
    ///
    /// Generates both axes eagerly; they are never regenerated. The store's
    /// own `from_config` constructors already reject an invalid
    /// configuration; `config` is checked again here for hand-built stores.
    pub fn with_store(config: GridConfig, store: S) -> Result<Self> {
        config.validate()?;

        let rows = AxisGenerator::new(AxisKind::Row, config.row_prefix.as_str())
            .generate(config.row_count);
        let columns = AxisGenerator::new(AxisKind::Column, config.column_prefix.as_str())
            .generate(config.column_count);

        tracing::info!(
            rows = rows.len(),
            columns = columns.len(),
            seeded = config.seed.is_some(),
            "grid data source ready"
        );

        Ok(Self {
            config,
            rows,
            columns,
            store,
            bucket_descriptor: BucketDescriptor::for_bucket(),
            task_descriptor: TaskDescriptor::for_task(),
        })
    }

    /// Row labels, in display order.
    pub fn row_axis(&self) -> &Axis {
        &self.rows
    }

    /// Column labels, in display order.
    pub fn column_axis(&self) -> &Axis {
        &self.columns
    }

    /// Member mapping for buckets.
    pub fn bucket_descriptor(&self) -> &BucketDescriptor {
        &self.bucket_descriptor
    }

    /// Member mapping for tasks.
    pub fn task_descriptor(&self) -> &TaskDescriptor {
        &self.task_descriptor
    }

    /// Configuration the source was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Underlying bucket store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Cache counters.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    /// Checks requested labels against the axes, reporting every stranger.
    pub fn validate_region(&self, rows: &[Label], columns: &[Label]) -> ValidationResult {
        validation::validate_region(rows, columns, &self.rows, &self.columns)
    }

    /// Pushes the bucket of every `rows × columns` pair, each followed by
    /// its tasks, into `sink`.
    ///
    /// Rows are traversed outer, columns inner. Repeated labels are counted
    /// once. All labels are checked before the cache is touched, so an
    /// [`GridError::UnknownRow`] / [`GridError::UnknownColumn`] leaves both
    /// the cache and the sink unchanged.
    pub fn populate_visible_region<K: RegionSink + ?Sized>(
        &mut self,
        rows: &[Label],
        columns: &[Label],
        sink: &mut K,
    ) -> Result<RegionSummary> {
        self.validate_region(rows, columns)
            .map_err(GridError::from_region_errors)?;

        let rows = distinct(rows);
        let columns = distinct(columns);

        let mut summary = RegionSummary::default();
        for row in &rows {
            for column in &columns {
                let resolved = self.store.get_or_create(row, column);
                if resolved.created {
                    summary.created += 1;
                }

                sink.add_bucket(&resolved.bucket);
                for task in &resolved.bucket.tasks {
                    sink.add_task(task);
                }

                summary.buckets += 1;
                summary.tasks += resolved.bucket.task_count();
            }
        }

        tracing::debug!(
            rows = rows.len(),
            columns = columns.len(),
            buckets = summary.buckets,
            created = summary.created,
            "visible region populated"
        );

        Ok(summary)
    }

    /// Populates a region into a fresh [`RegionContent`].
    pub fn load_region(&mut self, region: &VisibleRegion) -> Result<RegionContent> {
        let mut content = RegionContent::new();
        self.populate_visible_region(&region.rows, &region.columns, &mut content)?;
        Ok(content)
    }
}

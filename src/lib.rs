//! Lazy data source for virtualized bucket-scheduling grids.
//!
//! Feeds a grid host that renders workplaces (rows) against days (columns),
//! where each cell holds a capacity-bearing bucket of tasks. The axes are
//! generated once; buckets are synthesized the first time the host scrolls
//! their cell into view and are memoized for the life of the source.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Label`, `Axis`, `CellKey`, `Bucket`, `Task`
//! - **`generation`**: Axis label sequences and seeded random bucket synthesis
//! - **`cache`**: `BucketStore` with single-threaded and concurrent caches
//! - **`source`**: `GridDataSource`, the host contract (axes + region population)
//! - **`descriptor`**: Static member mappings declared to the host
//! - **`stats`**: Bucket load and cache counters
//! - **`validation`**: Configuration and region checks
//!
//! # Architecture
//!
//! Scheduling semantics (conflicts, overflow enforcement, reassignment),
//! layout and rendering all belong to the host. This crate only answers
//! "which labels exist" and "what is in these cells".

pub mod cache;
mod config;
pub mod descriptor;
mod error;
pub mod generation;
pub mod models;
pub mod source;
pub mod stats;
pub mod validation;

pub use config::{
    GridConfig, DEFAULT_COLUMN_COUNT, DEFAULT_MAX_CAPACITY, DEFAULT_MAX_CONSUMPTION,
    DEFAULT_MAX_TASKS_PER_BUCKET, DEFAULT_MIN_TASKS_PER_BUCKET, DEFAULT_ROW_COUNT,
    MAX_TASKS_PER_BUCKET,
};
pub use error::{GridError, Result};
pub use source::GridDataSource;

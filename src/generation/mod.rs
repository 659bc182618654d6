//! Synthetic data generation.
//!
//! - **`AxisGenerator`**: the fixed row and column label sequences.
//! - **`BucketGenerator`**: random capacity and task lists for one cell.

mod axis;
mod bucket;

pub use axis::{generate_columns, generate_rows, AxisGenerator, COLUMN_PREFIX, ROW_PREFIX};
pub use bucket::BucketGenerator;

//! Grid domain models.
//!
//! Provides the data types exchanged between the data source and a
//! virtualizing host: two label axes and the buckets (with their tasks)
//! living at each (row, column) intersection.
//!
//! # Domain Mappings
//!
//! | u-bucket-grid | Workforce | Manufacturing | Logistics |
//! |---------------|-----------|---------------|-----------|
//! | Row label | Workplace | Line | Dock |
//! | Column label | Day | Shift | Time Slot |
//! | Bucket | Daily Station Plan | Shift Load | Slot Booking |
//! | Task | Assignment | Order | Shipment |

mod axis;
mod bucket;
mod task;

pub use axis::{Axis, AxisKind, Label};
pub use bucket::{Bucket, CellKey};
pub use task::Task;

//! Axis label generation.
//!
//! Label `i` (0-based) reads `"{prefix} {i + 1}"`. Output depends only on
//! the prefix and the count.

use crate::models::{Axis, AxisKind, Label};

/// Default row label prefix.
pub const ROW_PREFIX: &str = "Workplace";
/// Default column label prefix.
pub const COLUMN_PREFIX: &str = "Day";

/// Generates the labels of one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisGenerator {
    kind: AxisKind,
    prefix: String,
}

impl AxisGenerator {
    /// Creates a generator with a custom prefix.
    pub fn new(kind: AxisKind, prefix: impl Into<String>) -> Self {
        Self {
            kind,
            prefix: prefix.into(),
        }
    }

    /// Row generator ("Workplace N").
    pub fn rows() -> Self {
        Self::new(AxisKind::Row, ROW_PREFIX)
    }

    /// Column generator ("Day N").
    pub fn columns() -> Self {
        Self::new(AxisKind::Column, COLUMN_PREFIX)
    }

    /// Axis kind produced.
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Generates `count` labels in display order.
    pub fn generate(&self, count: usize) -> Axis {
        let labels = (0..count)
            .map(|i| Label::new(i, format!("{} {}", self.prefix, i + 1)))
            .collect();
        Axis::from_labels(self.kind, labels)
    }
}

/// Generates `count` row labels: "Workplace 1", "Workplace 2", ...
pub fn generate_rows(count: usize) -> Axis {
    AxisGenerator::rows().generate(count)
}

/// Generates `count` column labels: "Day 1", "Day 2", ...
pub fn generate_columns(count: usize) -> Axis {
    AxisGenerator::columns().generate(count)
}

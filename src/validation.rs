//! Input validation for the grid data source.
//!
//! Checks configuration before axes are generated and checks requested
//! regions against the generated axes before the cache is touched.
//! Detects:
//! - Non-finite or non-positive capacity / consumption scales
//! - Task count bounds above [`MAX_TASKS_PER_BUCKET`]
//! - Requested labels that are not members of an axis

use crate::models::{Axis, AxisKind, Label};
use crate::{GridConfig, MAX_TASKS_PER_BUCKET};
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Offending label, for region errors.
    pub label: Option<Label>,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Capacity scale is not a positive finite number.
    InvalidCapacity,
    /// Consumption scale is not a positive finite number.
    InvalidConsumption,
    /// Task count bound exceeds the per-bucket limit.
    InvalidTaskRange,
    /// A label is not part of the row axis.
    UnknownRow,
    /// A label is not part of the column axis.
    UnknownColumn,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            label: None,
        }
    }

    fn unknown(kind: AxisKind, label: &Label) -> Self {
        let (kind, axis) = match kind {
            AxisKind::Row => (ValidationErrorKind::UnknownRow, "row"),
            AxisKind::Column => (ValidationErrorKind::UnknownColumn, "column"),
        };
        Self {
            kind,
            message: format!("Unknown {axis} label '{label}' at index {}", label.index),
            label: Some(label.clone()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Validates a grid configuration.
///
/// Axis sizes cannot be invalid (they are unsigned) and swapped task bounds
/// are normalized by [`GridConfig::task_range`]; only their magnitude is
/// checked.
pub fn validate_config(config: &GridConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if !is_positive_finite(config.max_capacity) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            format!(
                "max_capacity must be positive and finite, got {}",
                config.max_capacity
            ),
        ));
    }

    if !is_positive_finite(config.max_consumption) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConsumption,
            format!(
                "max_consumption must be positive and finite, got {}",
                config.max_consumption
            ),
        ));
    }

    let upper = config.min_tasks_per_bucket.max(config.max_tasks_per_bucket);
    if upper > MAX_TASKS_PER_BUCKET {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTaskRange,
            format!("task count bound {upper} exceeds the limit of {MAX_TASKS_PER_BUCKET}"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that every requested label belongs to its axis.
pub fn validate_region(
    rows: &[Label],
    columns: &[Label],
    row_axis: &Axis,
    column_axis: &Axis,
) -> ValidationResult {
    let mut errors = Vec::new();

    for label in rows.iter().filter(|l| !row_axis.contains(l)) {
        errors.push(ValidationError::unknown(AxisKind::Row, label));
    }

    for label in columns.iter().filter(|l| !column_axis.contains(l)) {
        errors.push(ValidationError::unknown(AxisKind::Column, label));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

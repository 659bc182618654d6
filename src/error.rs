//! Error types and result alias.
//!
//! Generation and cache lookups are infallible. Errors only arise from
//! caller misuse: asking for labels outside the generated axes, or building
//! a data source from an invalid configuration.

use crate::models::{AxisKind, Label};
use crate::validation::{ValidationError, ValidationErrorKind};

/// The result type used throughout this crate.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors reported by the data source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A requested row label is not a member of the row axis.
    #[error("unknown row label '{label}' at index {index}")]
    UnknownRow {
        /// Label text as supplied by the caller.
        label: String,
        /// Index as supplied by the caller.
        index: usize,
    },

    /// A requested column label is not a member of the column axis.
    #[error("unknown column label '{label}' at index {index}")]
    UnknownColumn {
        /// Label text as supplied by the caller.
        label: String,
        /// Index as supplied by the caller.
        index: usize,
    },

    /// The configuration was rejected.
    #[error("invalid configuration: {}", join_messages(.0))]
    InvalidConfig(Vec<ValidationError>),
}

impl GridError {
    /// Error for a label that is not a member of an axis of `kind`.
    pub fn unknown_label(kind: AxisKind, label: &Label) -> Self {
        let (text, index) = (label.text.to_string(), label.index);
        match kind {
            AxisKind::Row => Self::UnknownRow { label: text, index },
            AxisKind::Column => Self::UnknownColumn { label: text, index },
        }
    }

    /// Converts region validation errors, reporting the first stranger.
    ///
    /// Errors without an offending label are kept as a configuration error.
    pub(crate) fn from_region_errors(errors: Vec<ValidationError>) -> Self {
        let first = errors.iter().find_map(|e| {
            let label = e.label.as_ref()?;
            match e.kind {
                ValidationErrorKind::UnknownRow => Some(Self::unknown_label(AxisKind::Row, label)),
                ValidationErrorKind::UnknownColumn => {
                    Some(Self::unknown_label(AxisKind::Column, label))
                }
                _ => None,
            }
        });
        first.unwrap_or_else(|| Self::InvalidConfig(errors))
    }

    /// Whether this error reports a label outside the axes.
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownRow { .. } | Self::UnknownColumn { .. })
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for GridError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfig(errors)
    }
}

//! Axis and label model.
//!
//! An axis is the fixed, ordered set of labels along one dimension of the
//! grid: workplaces down the rows, days across the columns. Axes are built
//! once and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which dimension of the grid an axis spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    /// Row axis (e.g., workplaces).
    Row,
    /// Column axis (e.g., days).
    Column,
}

/// A label on one axis.
///
/// Carries its 0-based position and shared display text. Cloning is cheap:
/// the text is reference-counted, so every clone points at the same
/// allocation as the axis entry it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    /// 0-based generation index within the axis.
    pub index: usize,
    /// Display text (e.g., "Workplace 1").
    pub text: Arc<str>,
}

impl Label {
    /// Creates a label.
    pub fn new(index: usize, text: impl Into<Arc<str>>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Display text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether both labels share the same underlying text allocation.
    ///
    /// Two labels built independently with equal text are value-equal but
    /// not identical.
    pub fn is_same(&self, other: &Label) -> bool {
        self.index == other.index && Arc::ptr_eq(&self.text, &other.text)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An immutable, ordered sequence of labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axis {
    /// Dimension this axis spans.
    pub kind: AxisKind,
    labels: Vec<Label>,
}

impl Axis {
    /// Creates an axis from labels already in index order.
    pub(crate) fn from_labels(kind: AxisKind, labels: Vec<Label>) -> Self {
        debug_assert!(labels.iter().enumerate().all(|(i, l)| l.index == i));
        Self { kind, labels }
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the axis has no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    /// All labels in order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Iterates labels in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// Whether `label` is a member of this axis by identity.
    pub fn contains(&self, label: &Label) -> bool {
        self.get(label.index).is_some_and(|own| own.is_same(label))
    }
}

impl<'a> IntoIterator for &'a Axis {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_axis() -> Axis {
        Axis::from_labels(
            AxisKind::Row,
            vec![Label::new(0, "Workplace 1"), Label::new(1, "Workplace 2")],
        )
    }

    #[test]
    fn test_axis_lookup() {
        let axis = make_axis();
        assert_eq!(axis.len(), 2);
        assert!(!axis.is_empty());
        assert_eq!(axis.get(1).unwrap().as_str(), "Workplace 2");
        assert!(axis.get(2).is_none());
    }

    #[test]
    fn test_contains_by_identity() {
        let axis = make_axis();
        let own = axis.get(0).unwrap().clone();
        assert!(axis.contains(&own));

        // Equal text, different allocation
        let forged = Label::new(0, "Workplace 1");
        assert_eq!(forged, own);
        assert!(!axis.contains(&forged));

        // Right allocation, wrong index
        let shifted = Label {
            index: 1,
            text: own.text.clone(),
        };
        assert!(!axis.contains(&shifted));
    }

    #[test]
    fn test_label_display() {
        let label = Label::new(4, "Day 5");
        assert_eq!(label.to_string(), "Day 5");
    }
}

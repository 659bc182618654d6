//! Static member mappings declared to the host.
//!
//! A virtualizing grid does not know the entity types it renders; the data
//! source tells it once, up front, which member holds the row key, column
//! key, capacity, owning bucket and consumption. The accessors here read
//! those members from the crate's own [`Bucket`] and [`Task`] types.

use serde::{Deserialize, Serialize};

use crate::models::{Bucket, CellKey, Label, Task};

/// Member mapping for bucket entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketDescriptor {
    /// Entity type name.
    pub type_name: String,
    /// Member holding the row key.
    pub row_member: String,
    /// Member holding the column key.
    pub column_member: String,
    /// Member holding the capacity, if the host should draw capacity.
    pub capacity_member: Option<String>,
}

/// Member mapping for task entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Entity type name.
    pub type_name: String,
    /// Member holding the owning bucket reference.
    pub bucket_member: String,
    /// Member holding the consumption, if the host should draw load.
    pub consumption_member: Option<String>,
}

impl BucketDescriptor {
    /// Creates a descriptor without a capacity member.
    pub fn new(
        type_name: impl Into<String>,
        row_member: impl Into<String>,
        column_member: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            row_member: row_member.into(),
            column_member: column_member.into(),
            capacity_member: None,
        }
    }

    /// Sets the capacity member.
    pub fn with_capacity_member(mut self, member: impl Into<String>) -> Self {
        self.capacity_member = Some(member.into());
        self
    }

    /// Descriptor for [`Bucket`].
    pub fn for_bucket() -> Self {
        Self::new("Bucket", "row", "column").with_capacity_member("capacity")
    }

    /// Row key of a bucket.
    pub fn row_of<'a>(&self, bucket: &'a Bucket) -> &'a Label {
        &bucket.row
    }

    /// Column key of a bucket.
    pub fn column_of<'a>(&self, bucket: &'a Bucket) -> &'a Label {
        &bucket.column
    }

    /// Capacity of a bucket, when a capacity member is declared.
    pub fn capacity_of(&self, bucket: &Bucket) -> Option<f64> {
        self.capacity_member.as_ref().map(|_| bucket.capacity)
    }
}

impl TaskDescriptor {
    /// Creates a descriptor without a consumption member.
    pub fn new(type_name: impl Into<String>, bucket_member: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            bucket_member: bucket_member.into(),
            consumption_member: None,
        }
    }

    /// Sets the consumption member.
    pub fn with_consumption_member(mut self, member: impl Into<String>) -> Self {
        self.consumption_member = Some(member.into());
        self
    }

    /// Descriptor for [`Task`].
    pub fn for_task() -> Self {
        Self::new("Task", "bucket").with_consumption_member("consumption")
    }

    /// Owning bucket key of a task.
    pub fn bucket_of(&self, task: &Task) -> CellKey {
        task.bucket
    }

    /// Consumption of a task, when a consumption member is declared.
    pub fn consumption_of(&self, task: &Task) -> Option<f64> {
        self.consumption_member.as_ref().map(|_| task.consumption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_descriptor() {
        let d = BucketDescriptor::for_bucket();
        assert_eq!(d.type_name, "Bucket");
        assert_eq!(d.row_member, "row");
        assert_eq!(d.column_member, "column");
        assert_eq!(d.capacity_member.as_deref(), Some("capacity"));

        let mut bucket = Bucket::new(Label::new(1, "Workplace 2"), Label::new(0, "Day 1"), 12.5);
        bucket.push_task(1.0);
        assert_eq!(d.row_of(&bucket).as_str(), "Workplace 2");
        assert_eq!(d.column_of(&bucket).as_str(), "Day 1");
        assert_eq!(d.capacity_of(&bucket), Some(12.5));

        let bare = BucketDescriptor::new("Bucket", "row", "column");
        assert_eq!(bare.capacity_of(&bucket), None);
    }

    #[test]
    fn test_task_descriptor() {
        let d = TaskDescriptor::for_task();
        assert_eq!(d.bucket_member, "bucket");
        assert_eq!(d.consumption_member.as_deref(), Some("consumption"));

        let task = Task::new(0, CellKey::new(1, 0), 3.0);
        assert_eq!(d.bucket_of(&task), CellKey::new(1, 0));
        assert_eq!(d.consumption_of(&task), Some(3.0));
        assert_eq!(TaskDescriptor::new("Task", "bucket").consumption_of(&task), None);
    }
}

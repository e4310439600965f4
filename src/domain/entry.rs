//! Todo entries and their comparator policies
//!
//! An entry's id and creation time are fixed at construction; everything
//! else is mutable through setters.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sort order policies for entries within a list.
///
/// Each is a total order. Sorting is stable, so entries that compare equal
/// keep their relative positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Earliest deadline first (the default).
    #[default]
    ByDeadline,
    /// Oldest entry first.
    ByCreated,
    /// Incomplete entries before completed ones.
    ByCompleted,
    /// Lexicographic by title.
    ByTitle,
}

impl SortOrder {
    /// Compares two entries under this policy.
    pub fn compare(&self, lhs: &TodoEntry, rhs: &TodoEntry) -> Ordering {
        match self {
            SortOrder::ByDeadline => lhs.deadline.cmp(&rhs.deadline),
            SortOrder::ByCreated => lhs.created.cmp(&rhs.created),
            SortOrder::ByCompleted => lhs.completed.cmp(&rhs.completed),
            SortOrder::ByTitle => lhs.title.cmp(&rhs.title),
        }
    }
}

/// A single task within a list.
///
/// Move-only: entries are relocated when their list reorders, never
/// duplicated. Ids are assigned by the owning [`TodoList`](super::TodoList)
/// and are unique within it for the lifetime of the list.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TodoEntry {
    id: u32,
    title: String,
    description: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    deadline: DateTime<Utc>,
    completed: bool,
}

impl TodoEntry {
    /// Creates a fresh entry; the creation timestamp is taken now.
    ///
    /// Timestamps are held at millisecond granularity, matching what
    /// persistence keeps, so a rehydrated entry compares equal to the
    /// one that was saved.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created: to_millis(Utc::now()),
            deadline: to_millis(deadline),
            completed: false,
        }
    }

    /// Rebuilds an entry from previously persisted fields.
    pub fn restored(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        created: DateTime<Utc>,
        deadline: DateTime<Utc>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created,
            deadline,
            completed,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_deadline(&mut self, deadline: DateTime<Utc>) {
        self.deadline = to_millis(deadline);
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// Drops sub-millisecond precision.
fn to_millis(t: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(t.timestamp_millis()).unwrap_or(t)
}

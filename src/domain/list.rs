//! Todo lists
//!
//! A named, ordered collection of entries. Ids are assigned from a
//! monotonic counter and never reused, even after removal, so an id
//! identifies an entry for the lifetime of the list. Positions are a
//! separate, shifting concept: the list is re-sorted by the active order
//! after every insertion, and index-addressed operations work on the
//! currently-sorted view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SortOrder, TodoEntry};

/// A named, ordered sequence of [`TodoEntry`] values.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    title: String,
    entries: Vec<TodoEntry>,
    // Persisted so ids stay unique across runs.
    next_id: u32,
    #[serde(skip)]
    order: SortOrder,
}

impl TodoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            next_id: 0,
            order: SortOrder::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Adds a fresh entry and returns its position in the re-sorted list.
    ///
    /// The returned index is only valid until the next mutation; use the
    /// entry's id for a stable handle.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: DateTime<Utc>,
    ) -> usize {
        let entry = TodoEntry::new(self.take_id(), title, description, deadline);
        self.insert(entry)
    }

    /// Adds an entry rebuilt from persisted fields; same index contract as
    /// [`TodoList::add`].
    pub fn restore(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        created: DateTime<Utc>,
        deadline: DateTime<Utc>,
        completed: bool,
    ) -> usize {
        let entry = TodoEntry::restored(
            self.take_id(),
            title,
            description,
            created,
            deadline,
            completed,
        );
        self.insert(entry)
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert(&mut self, entry: TodoEntry) -> usize {
        let id = entry.id();
        self.entries.push(entry);
        self.sort_by(self.order);
        self.entries
            .iter()
            .position(|e| e.id() == id)
            .expect("entry just inserted")
    }

    /// Finds an entry by its persistent id.
    pub fn find(&self, id: u32) -> Option<&TodoEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Removes the entry at the given display index. The freed id is never
    /// reassigned.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Re-sorts with the default order (by deadline).
    pub fn sort(&mut self) {
        self.sort_by(SortOrder::default());
    }

    /// Makes `order` the active comparator and re-sorts the whole sequence.
    /// Subsequent insertions keep the list sorted under this order.
    pub fn sort_by(&mut self, order: SortOrder) {
        self.order = order;
        self.entries.sort_by(|a, b| order.compare(a, b));
    }

    /// Marks the entry at the given display index completed.
    pub fn mark_completed(&mut self, index: usize) -> bool {
        self.set_completed_at(index, true)
    }

    /// Clears the completed flag of the entry at the given display index.
    pub fn mark_incomplete(&mut self, index: usize) -> bool {
        self.set_completed_at(index, false)
    }

    fn set_completed_at(&mut self, index: usize, completed: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.set_completed(completed);
                true
            }
            None => false,
        }
    }

    /// Empties the list. Returns false if it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        true
    }

    pub fn entries(&self) -> &[TodoEntry] {
        &self.entries
    }

    pub fn entry_at_mut(&mut self, index: usize) -> Option<&mut TodoEntry> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

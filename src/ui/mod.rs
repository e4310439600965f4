//! # User interface boundary
//!
//! The session drives whatever implements [`Ui`]; the interactive
//! terminal variant lives in [`terminal`], and tests plug in scripted
//! implementations. Commands come back as [`ListAction`] / [`EntryAction`]
//! values carrying 0-based indices into the currently-rendered,
//! currently-sorted view.

mod editor;
mod terminal;

pub use editor::{edit_text, EditorError};
pub use terminal::TerminalUi;

use anyhow::Result;

use crate::domain::{TodoEntry, TodoList, User, UserDirectory};

/// Command returned from the all-lists screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// Quit the application.
    Exit,
    /// Enter the add-list flow.
    Add,
    /// Open the list at this display index.
    Select(usize),
    /// Remove the list at this display index.
    Remove(usize),
}

/// Command returned from a single list's entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Return to the all-lists screen.
    Back,
    /// Enter the add-entry flow.
    Add,
    /// Open the entry at this display index for editing.
    Select(usize),
    /// Remove the entry at this display index.
    Remove(usize),
    /// Mark the entry at this display index completed.
    Check(usize),
    /// Mark the entry at this display index incomplete.
    Uncheck(usize),
}

/// Capability interface the session drives.
pub trait Ui {
    /// Authenticates or registers a user. Must insert any newly registered
    /// user into the directory; returns the current-user record, or None
    /// when the flow was abandoned.
    fn login(&mut self, users: &mut UserDirectory) -> Result<Option<User>>;

    /// Renders all lists and waits for a command.
    fn show_all_lists(&mut self, lists: &[TodoList]) -> Result<ListAction>;

    /// Prompts for and appends a new list.
    fn create_list(&mut self, lists: &mut Vec<TodoList>) -> Result<()>;

    /// Renders one list's entries and waits for a command.
    fn list_entries(&mut self, list: &TodoList) -> Result<EntryAction>;

    /// Prompts for and appends a new entry to the list.
    fn create_entry(&mut self, list: &mut TodoList) -> Result<()>;

    /// Opens one entry for interactive editing.
    fn edit_entry(&mut self, entry: &mut TodoEntry) -> Result<()>;
}

//! Domain models for PeerTodo
//!
//! Contains the core business logic without any I/O concerns.

mod credential;
mod directory;
mod entry;
mod list;
mod user;

pub use credential::Credential;
pub use directory::UserDirectory;
pub use entry::{SortOrder, TodoEntry};
pub use list::TodoList;
pub use user::User;

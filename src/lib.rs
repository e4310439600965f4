//! PeerTodo - personal todo lists that persist between runs
//!
//! A single local user manages named todo lists, each holding dated,
//! titled entries with completion state. State lives in three binary
//! files under the per-user data directory and is loaded at startup and
//! saved at shutdown.

pub mod cli;
pub mod domain;
pub mod session;
pub mod storage;
pub mod ui;

pub use domain::{Credential, SortOrder, TodoEntry, TodoList, User, UserDirectory};
pub use session::Session;
pub use storage::DataStore;

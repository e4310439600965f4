//! # Storage Layer
//!
//! Binary persistence for PeerTodo.
//!
//! Each aggregate (current-user record, user directory, todo lists) is one
//! postcard blob in its own file under the data directory:
//!
//! ```text
//! ~/.local/share/p2d/
//! ├── login.bin   # current-user record (written only when signed in)
//! ├── user.bin    # user directory
//! └── todo.bin    # all todo lists
//! ```
//!
//! All writes are atomic (temp file + rename) and guarded by `fs2` file
//! locks. Files are read and written whole; a missing file means "empty
//! aggregate", a corrupt one is a fatal load error.

mod blob;
mod store;

pub use blob::BlobFile;
pub use store::{DataStore, StoreError};

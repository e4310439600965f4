//! The on-disk data store
//!
//! Three independent aggregates, each in its own binary file under the
//! per-user data directory:
//!
//! | Aggregate              | File        |
//! |------------------------|-------------|
//! | Current user record    | `login.bin` |
//! | User directory         | `user.bin`  |
//! | All todo lists         | `todo.bin`  |
//!
//! Blobs are postcard-encoded and decoded all-or-nothing; a truncated or
//! structurally mismatched blob is a fatal [`StoreError::Corrupt`] for
//! that aggregate. There is no version tag and no cross-file atomicity.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{TodoList, User, UserDirectory};

use super::blob::BlobFile;

const LOGIN_FILE: &str = "login.bin";
const USER_FILE: &str = "user.bin";
const TODO_FILE: &str = "todo.bin";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data file is corrupt: {path}")]
    Corrupt {
        path: PathBuf,
        source: postcard::Error,
    },

    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}

/// Access to the three persisted aggregates.
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// A store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform default location (`~/.local/share/p2d` on Linux).
    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "p2d").ok_or(StoreError::NoDataDir)?;
        Ok(Self::at(dirs.data_dir()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Creates the data directory. Idempotent.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory: {}", self.dir.display()))
    }

    pub fn login_path(&self) -> PathBuf {
        self.dir.join(LOGIN_FILE)
    }

    pub fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    pub fn todo_path(&self) -> PathBuf {
        self.dir.join(TODO_FILE)
    }

    /// Loads the current-user record, or None when never saved.
    pub fn load_login(&self) -> Result<Option<User>> {
        self.load(self.login_path())
    }

    /// Loads the user directory; missing file yields the empty directory.
    pub fn load_users(&self) -> Result<UserDirectory> {
        Ok(self.load(self.user_path())?.unwrap_or_default())
    }

    /// Loads all todo lists; missing file yields no lists.
    pub fn load_lists(&self) -> Result<Vec<TodoList>> {
        Ok(self.load(self.todo_path())?.unwrap_or_default())
    }

    pub fn save_login(&self, user: &User) -> Result<()> {
        self.save(self.login_path(), user)
    }

    pub fn save_users(&self, users: &UserDirectory) -> Result<()> {
        self.save(self.user_path(), users)
    }

    pub fn save_lists(&self, lists: &[TodoList]) -> Result<()> {
        self.save(self.todo_path(), &lists)
    }

    fn load<T: DeserializeOwned>(&self, path: PathBuf) -> Result<Option<T>> {
        let blob = BlobFile::new(path);
        if !blob.exists() {
            return Ok(None);
        }

        let bytes = blob.read()?;
        let value = postcard::from_bytes(&bytes).map_err(|source| StoreError::Corrupt {
            path: blob.path().to_path_buf(),
            source,
        })?;

        Ok(Some(value))
    }

    fn save<T: Serialize>(&self, path: PathBuf, value: &T) -> Result<()> {
        let bytes = postcard::to_stdvec(value).context("Failed to serialize aggregate")?;
        BlobFile::new(path).write(&bytes)
    }
}

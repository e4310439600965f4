//! Whole-file binary blob I/O
//!
//! Every aggregate persists as one self-contained blob. Writes go to a
//! temp sibling under an exclusive lock and are renamed into place; reads
//! take a shared lock. There is no finer-grained atomicity than "write
//! whole file".

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

/// One blob-per-file store.
pub struct BlobFile {
    path: PathBuf,
}

impl BlobFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the entire blob. The file must exist; callers guard with
    /// [`BlobFile::exists`].
    pub fn read(&self) -> Result<Vec<u8>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open data file: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on data file")?;

        let mut buf = Vec::new();
        (&file)
            .read_to_end(&mut buf)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(buf)
    }

    /// Replaces the blob atomically (temp file + rename).
    pub fn write(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("bin.tmp");

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on data file")?;

            file.write_all(data)
                .with_context(|| format!("Failed to write data file: {}", self.path.display()))?;
            file.flush().context("Failed to flush data file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

//! External editor invocation
//!
//! Free-text editing round-trips through `$EDITOR` on a scratch file. The
//! wait is a blocking OS-level wait with no timeout; a hung editor hangs
//! the application.

use std::io::Write;
use std::process::Command;

use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("editor '{editor}' could not be launched: {source}")]
    LaunchFailed {
        editor: String,
        source: std::io::Error,
    },

    #[error("editor '{editor}' exited with status {status}")]
    NonZeroExit { editor: String, status: String },
}

/// Runs `$EDITOR` (falling back to `vi`) on the given text and returns the
/// edited result. On any failure the caller keeps the original text.
pub fn edit_text(initial: &str) -> Result<String> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let mut file = tempfile::Builder::new()
        .prefix("p2d-")
        .suffix(".txt")
        .tempfile()
        .context("Failed to create scratch file for editing")?;
    file.write_all(initial.as_bytes())
        .context("Failed to write scratch file")?;
    file.flush().context("Failed to flush scratch file")?;

    let status = Command::new(&editor)
        .arg(file.path())
        .status()
        .map_err(|source| EditorError::LaunchFailed {
            editor: editor.clone(),
            source,
        })?;

    if !status.success() {
        return Err(EditorError::NonZeroExit {
            editor,
            status: status.to_string(),
        }
        .into());
    }

    let edited = std::fs::read_to_string(file.path())
        .context("Failed to read back edited scratch file")?;

    // Editors append a trailing newline; drop exactly one.
    Ok(edited.strip_suffix('\n').unwrap_or(&edited).to_string())
}

//! Infrastructure implementation of the `AppStateStore` port.
//!
//! The entire persisted state is one file holding the tracked app name,
//! verbatim, with no trailing newline.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::AppStateStore;

/// Pointer file name, resolved against the working directory.
pub const POINTER_FILE: &str = ".happy";

/// Pointer file manager.
pub struct PointerFile {
    path: PathBuf,
}

impl PointerFile {
    /// Pointer file in the current working directory (`./.happy`).
    #[must_use]
    pub fn in_current_dir() -> Self {
        Self::with_path(PathBuf::from(POINTER_FILE))
    }

    /// Create a pointer file manager with an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AppStateStore for PointerFile {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let name = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        Ok(Some(name))
    }

    fn save(&self, app_name: &str) -> Result<()> {
        std::fs::write(&self.path, app_name)
            .with_context(|| format!("writing {}", self.path.display()))
    }

    fn remove(&self) -> Result<()> {
        std::fs::remove_file(&self.path)
            .with_context(|| format!("removing {}", self.path.display()))
    }
}

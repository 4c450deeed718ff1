//! Infrastructure implementation of the `ManifestSource` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ManifestSource;
use crate::domain::manifest::MANIFEST_FILE;

/// `app.json` on disk.
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    /// Manifest in the current working directory (`./app.json`).
    #[must_use]
    pub fn in_current_dir() -> Self {
        Self::with_path(PathBuf::from(MANIFEST_FILE))
    }

    /// Manifest at an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ManifestSource for ManifestFile {
    /// Anything that is not a regular UTF-8 file counts as no manifest.
    fn read_manifest(&self) -> Result<Option<String>> {
        if !self.path.is_file() {
            tracing::debug!(path = %self.path.display(), "no manifest");
            return Ok(None);
        }
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        match String::from_utf8(bytes) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "manifest is not UTF-8");
                Ok(None)
            }
        }
    }
}

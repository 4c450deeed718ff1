//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::{App, BuildStatus};

// ── Platform Port ─────────────────────────────────────────────────────────────

/// The four remote operations `happy` needs from the platform.
///
/// Each call is a single request with no retry.
#[allow(async_fn_in_trait)]
pub trait PlatformClient {
    /// Create a new app with a generated name.
    async fn create_app(&self) -> Result<App>;
    /// Start a build of `tarball_url` for the app, returning the build id.
    async fn create_build(&self, app_id: &str, tarball_url: &str) -> Result<String>;
    /// Current status of a build.
    async fn build_status(&self, app_id: &str, build_id: &str) -> Result<BuildStatus>;
    /// Delete the app with the given name.
    async fn delete_app(&self, app_name: &str) -> Result<()>;
}

// ── State and Manifest Ports ──────────────────────────────────────────────────

/// Persistence of the single tracked app name.
pub trait AppStateStore {
    /// The tracked app name, verbatim, or `None` when nothing is tracked.
    fn load(&self) -> Result<Option<String>>;
    /// Track `app_name`, replacing anything tracked before.
    fn save(&self, app_name: &str) -> Result<()>;
    /// Stop tracking. Fails when nothing is tracked.
    fn remove(&self) -> Result<()>;
}

/// Read access to the optional local manifest.
pub trait ManifestSource {
    /// Raw manifest contents, or `None` when there is no manifest.
    fn read_manifest(&self) -> Result<Option<String>>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Where user-facing status lines go. Sync trait.
pub trait ProgressReporter {
    /// Emit one complete line of output.
    fn report(&self, line: &str);
}

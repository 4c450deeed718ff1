//! `up` use-case: create an app, build it, wait, and start tracking it.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{AppStateStore, ManifestSource, PlatformClient, ProgressReporter};
use crate::application::services::build_wait::wait_for_build;
use crate::domain::{App, explicit_tarball_url, resolve_tarball_url};

/// Resolve the tarball URL: the explicit flag first, then the manifest.
///
/// # Errors
///
/// Returns `HappyError::NoTarballUrl` when neither yields a URL, or an error
/// if the manifest exists but cannot be read.
pub fn tarball_url(explicit: Option<&str>, manifest: &impl ManifestSource) -> Result<String> {
    if let Some(url) = explicit_tarball_url(explicit) {
        return Ok(url.to_string());
    }
    let raw = manifest.read_manifest()?;
    let url = resolve_tarball_url(None, raw.as_deref())?;
    tracing::info!(tarball_url = %url, "inferred tarball url from manifest");
    Ok(url)
}

/// Create an app from `tarball_url`, wait for its build and track it.
///
/// Any non-pending final build status counts as done; a status other than
/// `succeeded` is only logged.
///
/// # Errors
///
/// Returns an error if any platform call fails or the app name cannot be
/// persisted. No cleanup is attempted for an app that was already created.
pub async fn provision(
    client: &impl PlatformClient,
    state: &impl AppStateStore,
    reporter: &impl ProgressReporter,
    tarball_url: &str,
    poll_interval: Duration,
) -> Result<App> {
    let app = client.create_app().await?;
    reporter.report(&format!("Creating app... {}", app.name));

    let build_id = client.create_build(&app.id, tarball_url).await?;
    let status = wait_for_build(client, &app.id, &build_id, poll_interval).await?;
    if !status.is_succeeded() {
        tracing::warn!(app = %app.name, status = %status, "build finished without succeeding");
    }
    reporter.report("Building... done");

    state.save(&app.name)?;
    tracing::info!(app = %app.name, "tracking app");

    reporter.report(&format!("It's up! :) {}", app.web_url()));
    Ok(app)
}

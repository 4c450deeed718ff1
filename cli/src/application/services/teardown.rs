//! `down` use-case: delete the tracked app and forget it.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;

use crate::application::ports::{AppStateStore, PlatformClient, ProgressReporter};
use crate::domain::HappyError;

/// Delete the tracked app and remove the local record.
///
/// Returns the name of the deleted app.
///
/// # Errors
///
/// Returns `HappyError::NoTrackedApp` (without touching the platform) when no
/// app is tracked, or an error if the delete call or state removal fails.
pub async fn teardown(
    client: &impl PlatformClient,
    state: &impl AppStateStore,
    reporter: &impl ProgressReporter,
) -> Result<String> {
    let app_name = state
        .load()?
        .filter(|name| !name.is_empty())
        .ok_or(HappyError::NoTrackedApp)?;

    reporter.report(&format!("Destroying app {app_name}... done"));
    client.delete_app(&app_name).await?;

    state.remove()?;
    tracing::info!(app = %app_name, "stopped tracking app");

    reporter.report("It's down. :(");
    Ok(app_name)
}

//! Build status polling.

use std::time::Duration;

use anyhow::Result;

use crate::application::ports::PlatformClient;
use crate::domain::BuildStatus;

/// Poll the build until its status is anything other than `pending`.
///
/// Sleeps `interval` between checks. There is no attempt limit; the loop ends
/// when the platform reports a final status, a status request fails, or the
/// process is interrupted.
///
/// # Errors
///
/// Returns the first error from a status request.
pub async fn wait_for_build(
    client: &impl PlatformClient,
    app_id: &str,
    build_id: &str,
    interval: Duration,
) -> Result<BuildStatus> {
    loop {
        let status = client.build_status(app_id, build_id).await?;
        if !status.is_pending() {
            tracing::debug!(build_id, status = %status, "build finished");
            return Ok(status);
        }
        tracing::debug!(build_id, "build pending");
        tokio::time::sleep(interval).await;
    }
}

//! `happy down`: delete the tracked app.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::teardown::teardown;

/// Run `happy down`.
///
/// # Errors
///
/// Returns an error if no app is tracked or the delete call fails.
pub async fn run(app: &AppContext) -> Result<()> {
    teardown(&app.client, &app.state, &app.reporter).await?;
    Ok(())
}

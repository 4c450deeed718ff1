//! `happy up [--tarball-url=URL]`: create, build and track an app.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::provision;
use crate::commands::UpArgs;

/// Run `happy up`.
///
/// # Errors
///
/// Returns an error if no tarball URL can be determined or any platform call
/// fails.
pub async fn run(args: &UpArgs, app: &AppContext) -> Result<()> {
    let tarball_url = provision::tarball_url(args.tarball_url.as_deref(), &app.manifest)?;
    provision::provision(
        &app.client,
        &app.state,
        &app.reporter,
        &tarball_url,
        app.settings.poll_interval,
    )
    .await?;
    Ok(())
}

//! Typed domain error enum.
//!
//! Implements `thiserror::Error` and converts to `anyhow::Error` via the `?`
//! operator. `main` renders every error as `Error: <chain>` and exits 1.

use thiserror::Error;

/// User-facing failures of `happy up` / `happy down`.
#[derive(Debug, Error)]
pub enum HappyError {
    #[error(
        "No tarball URL could be determined. Pass --tarball-url or add a \"repository\" to app.json."
    )]
    NoTarballUrl,

    #[error("No app is being tracked here (no .happy file). Run 'happy up' first.")]
    NoTrackedApp,

    #[error("Heroku API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("No Heroku credentials: {0}\n\nSet HEROKU_API_KEY, pass --auth-token, or run 'heroku login'.")]
    MissingCredentials(String),
}

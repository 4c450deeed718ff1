//! Application context: unified state passed to every command handler.
//!
//! Constructed once in `Cli::run()` from resolved settings and passed as
//! `&AppContext` to the command handlers.

use anyhow::Result;

use crate::domain::Settings;
use crate::infra::{CredentialSource, HerokuClient, ManifestFile, PointerFile};
use crate::output::StdoutReporter;

/// Production wiring of every port.
pub struct AppContext {
    /// Resolved runtime settings.
    pub settings: Settings,
    /// Heroku Platform API client.
    pub client: HerokuClient,
    /// `.happy` in the working directory.
    pub state: PointerFile,
    /// `app.json` in the working directory.
    pub manifest: ManifestFile,
    /// Status lines to stdout.
    pub reporter: StdoutReporter,
}

impl AppContext {
    /// Wire up the production implementations.
    ///
    /// No network or credential lookup happens here.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built from `settings`.
    pub fn new(settings: Settings, credentials: CredentialSource) -> Result<Self> {
        let client = HerokuClient::new(&settings, credentials)?;
        Ok(Self {
            settings,
            client,
            state: PointerFile::in_current_dir(),
            manifest: ManifestFile::in_current_dir(),
            reporter: StdoutReporter,
        })
    }
}

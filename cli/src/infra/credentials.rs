//! Platform credential lookup.
//!
//! A token passed on the command line (or via `HEROKU_API_KEY`) is used as-is.
//! Otherwise the Heroku CLI is asked for the logged-in user's token.

use std::process::Stdio;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{AuthToken, HappyError};

/// Timeout for `heroku auth:token`.
pub const HEROKU_CLI_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the API token comes from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Token supplied explicitly.
    Static(AuthToken),
    /// Ask `heroku auth:token`.
    HerokuCli,
}

impl CredentialSource {
    /// Use `token` when it is non-blank, otherwise fall back to the Heroku CLI.
    #[must_use]
    pub fn from_flag(token: Option<&str>) -> Self {
        token
            .and_then(AuthToken::new)
            .map_or(Self::HerokuCli, Self::Static)
    }

    /// Produce a token.
    ///
    /// # Errors
    ///
    /// Returns `HappyError::MissingCredentials` if the Heroku CLI cannot be
    /// run, fails, times out, or prints nothing.
    pub async fn resolve(&self) -> Result<AuthToken> {
        match self {
            Self::Static(token) => Ok(token.clone()),
            Self::HerokuCli => heroku_cli_token().await,
        }
    }
}

async fn heroku_cli_token() -> Result<AuthToken> {
    tracing::debug!("asking heroku CLI for an auth token");
    let child = tokio::process::Command::new("heroku")
        .arg("auth:token")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = match tokio::time::timeout(HEROKU_CLI_TIMEOUT, child).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return Err(
                HappyError::MissingCredentials(format!("cannot run the Heroku CLI ({e})")).into(),
            );
        }
        Err(_) => {
            return Err(HappyError::MissingCredentials(format!(
                "'heroku auth:token' timed out after {}s",
                HEROKU_CLI_TIMEOUT.as_secs()
            ))
            .into());
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HappyError::MissingCredentials(format!(
            "'heroku auth:token' failed: {}",
            stderr.trim()
        ))
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    AuthToken::new(&stdout).ok_or_else(|| {
        HappyError::MissingCredentials("'heroku auth:token' printed no token".to_string()).into()
    })
}

//! Runtime settings and the platform credential.
//!
//! Pure types only: no I/O, no async, no environment access. Values are
//! collected by `crate::cli` (flags and env vars) and threaded into the
//! infra constructors.

use std::fmt;
use std::time::Duration;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_API_URL: &str = "https://api.heroku.com";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ── Settings ─────────────────────────────────────────────────────────────────

/// Everything the infra layer needs to talk to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the Platform API.
    pub api_url: String,
    /// Delay between build status checks.
    pub poll_interval: Duration,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Settings {
    /// Build settings from CLI values, falling back to defaults.
    #[must_use]
    pub fn new(api_url: &str, poll_interval_ms: Option<u64>) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            poll_interval: poll_interval_ms.map_or(DEFAULT_POLL_INTERVAL, Duration::from_millis),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("happy/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, None)
    }
}

// ── Credential ───────────────────────────────────────────────────────────────

/// Platform API token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a token, trimming whitespace. Blank input yields `None`.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw secret, for the `Authorization` header only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(****)")
    }
}

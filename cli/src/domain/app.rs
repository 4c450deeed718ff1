//! Remote application and build records.

use std::fmt;

/// An app as created by the platform. Only `name` is ever persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Opaque platform identifier.
    pub id: String,
    /// Generated human-readable name, e.g. `sushi-hat-4242`.
    pub name: String,
}

impl App {
    /// Public URL the app is served from.
    #[must_use]
    pub fn web_url(&self) -> String {
        web_url(&self.name)
    }
}

/// `https://<name>.herokuapp.com`
#[must_use]
pub fn web_url(app_name: &str) -> String {
    format!("https://{app_name}.herokuapp.com")
}

/// Build status as reported by the platform.
///
/// The vocabulary belongs to the remote API. Locally only "still pending"
/// versus "anything else" drives control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStatus(String);

impl BuildStatus {
    pub const PENDING: &'static str = "pending";
    pub const SUCCEEDED: &'static str = "succeeded";

    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0 == Self::PENDING
    }

    #[must_use]
    pub fn is_succeeded(&self) -> bool {
        self.0 == Self::SUCCEEDED
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

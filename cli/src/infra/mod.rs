//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: HTTP calls to the platform,
//! the credential subprocess, and local file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod credentials;
pub mod heroku;
pub mod manifest;
pub mod state;

pub use credentials::CredentialSource;
pub use heroku::HerokuClient;
pub use manifest::ManifestFile;
pub use state::PointerFile;

//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `reqwest`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod app;
pub mod config;
pub mod error;
pub mod manifest;

pub use app::{App, BuildStatus, web_url};
pub use config::{AuthToken, Settings};
pub use error::HappyError;
pub use manifest::{explicit_tarball_url, resolve_tarball_url, tarball_url_from_manifest};

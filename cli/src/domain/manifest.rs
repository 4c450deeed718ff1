//! Tarball URL inference from an `app.json` manifest.

use serde_json::Value;

use crate::domain::error::HappyError;

/// Manifest file looked up in the working directory.
pub const MANIFEST_FILE: &str = "app.json";

const TARBALL_SUFFIX: &str = "/tarball/master/";

/// Derive a tarball URL from raw manifest contents.
///
/// Returns `None` unless the manifest is a JSON object with a string
/// `repository` key. The repository is not validated; the suffix is appended
/// as-is.
#[must_use]
pub fn tarball_url_from_manifest(raw: &str) -> Option<String> {
    let manifest: Value = serde_json::from_str(raw).ok()?;
    let repository = manifest.as_object()?.get("repository")?.as_str()?;
    Some(format!("{repository}{TARBALL_SUFFIX}"))
}

/// The `--tarball-url` value, if it was given and is non-empty.
#[must_use]
pub fn explicit_tarball_url(explicit: Option<&str>) -> Option<&str> {
    explicit.filter(|u| !u.is_empty())
}

/// Pick the tarball URL for `happy up`.
///
/// An explicit, non-empty URL always wins. Otherwise the manifest contents
/// (if any) are used for inference.
///
/// # Errors
///
/// Returns [`HappyError::NoTarballUrl`] when neither source yields a URL.
pub fn resolve_tarball_url(
    explicit: Option<&str>,
    manifest: Option<&str>,
) -> Result<String, HappyError> {
    if let Some(url) = explicit_tarball_url(explicit) {
        return Ok(url.to_string());
    }
    manifest
        .and_then(tarball_url_from_manifest)
        .ok_or(HappyError::NoTarballUrl)
}

//! Shared test helpers: fake platform, in-memory state and a recording reporter.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::Result;
use happy_cli::application::ports::{
    AppStateStore, ManifestSource, PlatformClient, ProgressReporter,
};
use happy_cli::domain::{App, BuildStatus, HappyError};

pub const APP_ID: &str = "12345";
pub const APP_NAME: &str = "butt-man-123";
pub const BUILD_ID: &str = "build-1";

// ── Fake platform ────────────────────────────────────────────────────────────

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateApp,
    CreateBuild { app_id: String, tarball_url: String },
    BuildStatus { app_id: String, build_id: String },
    DeleteApp { app_name: String },
}

/// Platform double that records calls and replays canned build statuses.
///
/// Once the canned statuses run out, every further status check reports
/// `succeeded`.
pub struct FakePlatform {
    statuses: RefCell<VecDeque<&'static str>>,
    calls: RefCell<Vec<Call>>,
    fail_delete: bool,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::with_statuses(&[])
    }

    pub fn with_statuses(statuses: &[&'static str]) -> Self {
        Self {
            statuses: RefCell::new(statuses.iter().copied().collect()),
            calls: RefCell::new(Vec::new()),
            fail_delete: false,
        }
    }

    pub fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn status_checks(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::BuildStatus { .. }))
            .count()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteApp { app_name } => Some(app_name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn built_tarballs(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::CreateBuild { tarball_url, .. } => Some(tarball_url.clone()),
                _ => None,
            })
            .collect()
    }
}

impl PlatformClient for FakePlatform {
    async fn create_app(&self) -> Result<App> {
        self.calls.borrow_mut().push(Call::CreateApp);
        Ok(App {
            id: APP_ID.to_string(),
            name: APP_NAME.to_string(),
        })
    }

    async fn create_build(&self, app_id: &str, tarball_url: &str) -> Result<String> {
        self.calls.borrow_mut().push(Call::CreateBuild {
            app_id: app_id.to_string(),
            tarball_url: tarball_url.to_string(),
        });
        Ok(BUILD_ID.to_string())
    }

    async fn build_status(&self, app_id: &str, build_id: &str) -> Result<BuildStatus> {
        self.calls.borrow_mut().push(Call::BuildStatus {
            app_id: app_id.to_string(),
            build_id: build_id.to_string(),
        });
        let next = self.statuses.borrow_mut().pop_front().unwrap_or("succeeded");
        Ok(BuildStatus::new(next))
    }

    async fn delete_app(&self, app_name: &str) -> Result<()> {
        self.calls.borrow_mut().push(Call::DeleteApp {
            app_name: app_name.to_string(),
        });
        if self.fail_delete {
            return Err(HappyError::Api {
                status: 404,
                message: "Couldn't find that app.".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Platform double whose app creation fails.
pub struct UnreachablePlatform;

impl PlatformClient for UnreachablePlatform {
    async fn create_app(&self) -> Result<App> {
        anyhow::bail!("connection refused")
    }
    async fn create_build(&self, _: &str, _: &str) -> Result<String> {
        anyhow::bail!("create_build not expected in this test")
    }
    async fn build_status(&self, _: &str, _: &str) -> Result<BuildStatus> {
        anyhow::bail!("build_status not expected in this test")
    }
    async fn delete_app(&self, _: &str) -> Result<()> {
        anyhow::bail!("connection refused")
    }
}

// ── In-memory state ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryState {
    app_name: RefCell<Option<String>>,
}

impl MemoryState {
    pub fn tracking(app_name: &str) -> Self {
        Self {
            app_name: RefCell::new(Some(app_name.to_string())),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.app_name.borrow().clone()
    }
}

impl AppStateStore for MemoryState {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.app_name.borrow().clone())
    }

    fn save(&self, app_name: &str) -> Result<()> {
        *self.app_name.borrow_mut() = Some(app_name.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        anyhow::ensure!(self.app_name.borrow_mut().take().is_some(), "nothing tracked");
        Ok(())
    }
}

// ── Manifest ─────────────────────────────────────────────────────────────────

pub struct StaticManifest(pub Option<&'static str>);

impl ManifestSource for StaticManifest {
    fn read_manifest(&self) -> Result<Option<String>> {
        Ok(self.0.map(String::from))
    }
}

/// Manifest source that must never be consulted.
pub struct UntouchedManifest;

impl ManifestSource for UntouchedManifest {
    fn read_manifest(&self) -> Result<Option<String>> {
        anyhow::bail!("manifest must not be read when --tarball-url is given")
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingReporter {
    lines: RefCell<Vec<String>>,
}

impl RecordingReporter {
    /// Everything reported, as it would appear on stdout.
    pub fn output(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|l| format!("{l}\n"))
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

//! Unit tests for build status polling.

#![allow(clippy::expect_used)]

use std::time::Duration;

use happy_cli::application::services::build_wait::wait_for_build;

use crate::helpers::{APP_ID, BUILD_ID, FakePlatform};

#[tokio::test]
async fn returns_immediately_when_not_pending() {
    let platform = FakePlatform::with_statuses(&["succeeded"]);

    let status = wait_for_build(&platform, APP_ID, BUILD_ID, Duration::ZERO)
        .await
        .expect("wait");

    assert!(status.is_succeeded());
    assert_eq!(platform.status_checks(), 1);
}

#[tokio::test]
async fn keeps_polling_while_pending() {
    let platform = FakePlatform::with_statuses(&["pending", "pending", "pending", "succeeded"]);

    let status = wait_for_build(&platform, APP_ID, BUILD_ID, Duration::ZERO)
        .await
        .expect("wait");

    assert!(status.is_succeeded());
    assert_eq!(platform.status_checks(), 4);
}

#[tokio::test]
async fn any_non_pending_status_ends_the_loop() {
    let platform = FakePlatform::with_statuses(&["pending", "failed", "pending"]);

    let status = wait_for_build(&platform, APP_ID, BUILD_ID, Duration::ZERO)
        .await
        .expect("wait");

    assert_eq!(status.as_str(), "failed");
    assert_eq!(platform.status_checks(), 2);
}

#[tokio::test(start_paused = true)]
async fn sleeps_the_fixed_interval_between_checks() {
    let platform = FakePlatform::with_statuses(&["pending", "pending", "succeeded"]);
    let start = tokio::time::Instant::now();

    wait_for_build(&platform, APP_ID, BUILD_ID, Duration::from_secs(3))
        .await
        .expect("wait");

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(6), "slept {elapsed:?}");
    assert!(elapsed < Duration::from_secs(9), "slept {elapsed:?}");
}

//! Output module
//!
//! Status lines for `up` and `down` are part of the CLI contract and go to
//! stdout unstyled. Diagnostics go to stderr through `tracing`.

use std::io::Write as _;

use crate::application::ports::ProgressReporter;

/// `ProgressReporter` that writes each line to stdout and flushes it, so
/// progress is visible while the build is still being polled.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl ProgressReporter for StdoutReporter {
    fn report(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not abort an in-flight deploy.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

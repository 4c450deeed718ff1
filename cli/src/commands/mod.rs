//! Command implementations

pub mod down;
pub mod up;

use clap::Args;

/// Arguments for the up command.
#[derive(Args, Debug, Default)]
pub struct UpArgs {
    /// URL of the source tarball to build (defaults to the app.json repository)
    #[arg(long, value_name = "URL")]
    pub tarball_url: Option<String>,
}

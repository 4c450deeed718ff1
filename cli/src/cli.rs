//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;
use crate::domain::Settings;
use crate::domain::config::DEFAULT_API_URL;
use crate::infra::CredentialSource;

/// Help output starts with the usage line.
const HELP_TEMPLATE: &str = "\
{usage-heading} {usage}

{about-with-newline}
{all-args}{after-help}";

/// Quickly set up and tear down Heroku apps!
#[derive(Parser)]
#[command(
    name = "happy",
    version,
    propagate_version = true,
    help_template = HELP_TEMPLATE
)]
pub struct Cli {
    /// Heroku Platform API base URL
    #[arg(long, global = true, env = "HAPPY_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Heroku API token (defaults to `heroku auth:token`)
    #[arg(long, global = true, env = "HEROKU_API_KEY", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// Milliseconds between build status checks
    #[arg(long, global = true, env = "HAPPY_POLL_INTERVAL_MS", hide = true)]
    pub poll_interval_ms: Option<u64>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an app, build it from a tarball, and track it in .happy
    Up(commands::UpArgs),

    /// Destroy the app tracked in .happy
    Down,
}

impl Cli {
    /// Execute the CLI command. Without a subcommand, print help.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            api_url,
            auth_token,
            poll_interval_ms,
            verbose: _,
            command,
        } = self;

        let Some(command) = command else {
            Cli::command().print_help()?;
            return Ok(());
        };

        let settings = Settings::new(&api_url, poll_interval_ms);
        let app = AppContext::new(settings, CredentialSource::from_flag(auth_token.as_deref()))?;

        match command {
            Command::Up(args) => commands::up::run(&args, &app).await,
            Command::Down => commands::down::run(&app).await,
        }
    }
}

//! Happy - quickly set up and tear down Heroku apps

use std::process::ExitCode;

use clap::Parser;

use happy_cli::cli::Cli;
use happy_cli::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fanctl_cli::cli::Cli;
use fanctl_cli::error::CliError;
use fanctl_cli::prompt::TermPrompt;
use fanctl_cli::session::Session;
use fanctl_core::{Controller, ControllerConfig};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Run the console and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // The controller address is the one required piece of configuration;
    // without it no menu is ever shown.
    let Some(address) = cli.global.controller else {
        return Err(CliError::NoController);
    };

    let config = ControllerConfig::new(address)
        .with_timeout(Duration::from_secs(cli.global.timeout));
    let controller = Controller::new(&config)?;

    Session::new(controller, TermPrompt::new()).run().await?;

    tracing::info!("session closed");
    Ok(())
}

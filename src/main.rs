use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use learnpath::cli::{parse_args, run_cli_command, version_line, CliCommand, USAGE};
use learnpath::config::ClientConfig;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LEARNPATH_LOG";

fn init_tracing() {
    // Logs go to stderr so rendered output on stdout stays clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| "learnpath=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let command = parse_args(std::env::args());

    // These never touch the network or the config file.
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    let config = ClientConfig::load()?;
    tracing::debug!(base_url = %config.base_url, "configuration loaded");

    run_cli_command(command, &config).await
}

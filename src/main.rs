//! Groupie CLI entry point.

use clap::Parser;

use groupie::cli::{self, Cli};
use groupie::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let config = match cli::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => cli::handle_error(&err, json),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => cli::handle_error(&err, json),
    };

    if let Err(err) = cli::run(cli, config).await {
        tracing::error!(error = %format!("{err:#}"), "command failed");
        cli::handle_error(&err, json);
    }
}

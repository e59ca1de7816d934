//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

use std::path::Path;

use anyhow::Result;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

pub use types::{Cli, Commands, FilterArgs};

/// Load configuration from `path`, or from the project-local defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Serve { host, port } => commands::serve::execute(config, host, port).await,
        Commands::Search { query, filters } => {
            commands::search::execute(config, query, filters, cli.json).await
        }
        Commands::Suggest { query } => commands::suggest::execute(config, query, cli.json).await,
    }
}

/// Print an error the way the output mode expects and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}

use anyhow::{Context, Result};

use crate::cli::output::format_suggestions;
use crate::domain::models::Config;
use crate::infrastructure::setup::build_catalog;

/// Handle the one-shot suggest command
pub async fn execute(config: Config, query: String, json: bool) -> Result<()> {
    let catalog = build_catalog(&config).await?;
    let suggestions = catalog
        .suggest(&query)
        .await
        .context("Failed to compute suggestions")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else if suggestions.is_empty() {
        println!("No suggestions for {query:?}.");
    } else {
        println!("{}", format_suggestions(&suggestions));
    }

    Ok(())
}

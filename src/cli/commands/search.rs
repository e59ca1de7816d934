use anyhow::{Context, Result};

use crate::cli::output::format_artists;
use crate::cli::types::FilterArgs;
use crate::domain::models::Config;
use crate::infrastructure::setup::build_catalog;

/// Handle the one-shot search command
pub async fn execute(config: Config, query: String, filters: FilterArgs, json: bool) -> Result<()> {
    let catalog = build_catalog(&config).await?;
    let result = catalog
        .search(&query, &filters.to_criteria())
        .await
        .context("Search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_empty() {
        println!("No artists found.");
    } else {
        println!("{}", format_artists(&result.artists));
        println!(
            "\nShowing {} artist{}",
            result.len(),
            if result.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

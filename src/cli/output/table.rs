//! Table output formatting for CLI commands
//!
//! Renders search results and suggestions with comfy-table.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::domain::models::{Artist, Suggestion};

fn base_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}

/// Format search results as a table
pub fn format_artists(artists: &[Artist]) -> String {
    let mut table = base_table(&["ID", "Name", "Members", "Created", "First album"]);

    for artist in artists {
        table.add_row(vec![
            Cell::new(artist.id),
            Cell::new(&artist.name),
            Cell::new(truncate(&artist.members.join(", "), 60)),
            Cell::new(artist.creation_date),
            Cell::new(&artist.first_album),
        ]);
    }

    table.to_string()
}

/// Format suggestions as a table
pub fn format_suggestions(suggestions: &[Suggestion]) -> String {
    let mut table = base_table(&["Suggestion", "Type"]);

    for suggestion in suggestions {
        table.add_row(vec![
            Cell::new(&suggestion.text),
            Cell::new(suggestion.category),
        ]);
    }

    table.to_string()
}

/// Truncate a string to a maximum number of characters, appending "..." if truncated.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

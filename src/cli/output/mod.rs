//! Output formatting utilities for the CLI.

pub mod table;

pub use table::{format_artists, format_suggestions};

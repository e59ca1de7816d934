//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::FilterCriteria;

#[derive(Parser)]
#[command(name = "groupie")]
#[command(about = "Groupie - artist catalog service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .groupie/config.yaml + .groupie/local.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the JSON API until interrupted
    Serve {
        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch the catalog once and search it
    Search {
        /// Search text; four digits search by creation year
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Fetch the catalog once and list suggestions for a partial query
    Suggest {
        /// Partial search text
        query: String,
    },
}

/// Filter flags for the search command.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Earliest creation year
    #[arg(long)]
    pub creation_min: Option<i32>,

    /// Latest creation year
    #[arg(long)]
    pub creation_max: Option<i32>,

    /// Earliest first album year
    #[arg(long)]
    pub album_min: Option<i32>,

    /// Latest first album year
    #[arg(long)]
    pub album_max: Option<i32>,

    /// Accepted member counts (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub members: Vec<usize>,

    /// Accepted location substrings (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub location: Vec<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        let defaults = FilterCriteria::unrestricted();
        FilterCriteria {
            creation_year_min: self.creation_min.unwrap_or(defaults.creation_year_min),
            creation_year_max: self.creation_max.unwrap_or(defaults.creation_year_max),
            first_album_year_min: self.album_min.unwrap_or(defaults.first_album_year_min),
            first_album_year_max: self.album_max.unwrap_or(defaults.first_album_year_max),
            members: self.members.clone(),
            locations: self.location.clone(),
        }
    }
}

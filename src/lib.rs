//! Groupie - artist catalog service
//!
//! Groupie aggregates four remote datasets (artists, locations, dates,
//! relations) into one in-memory snapshot, refreshes it on a time-to-live
//! schedule, and answers search, suggestion, and detail queries against it.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): data model, errors, and port traits
//! - **Service Layer** (`services`): aggregate fetcher, snapshot cache,
//!   query engine, and the catalog facade
//! - **Infrastructure Layer** (`infrastructure`): HTTP source client,
//!   geocoder, configuration, logging, wiring
//! - **Adapters** (`adapters`): JSON HTTP API
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use groupie::infrastructure::{config::ConfigLoader, setup::build_catalog};
//! use groupie::FilterCriteria;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let catalog = build_catalog(&config).await?;
//!     let result = catalog.search("queen", &FilterCriteria::unrestricted()).await?;
//!     println!("{} matches", result.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{
    CatalogError, GeocodeError, QueryInputError, RefreshError, SourceError, SourceKind,
};
pub use domain::models::{
    Aggregate, Artist, ArtistDetail, Config, FilterCriteria, SearchResult, Suggestion,
    SuggestionCategory,
};
pub use domain::ports::{Geocoder, NullGeocoder, SourceClient, SourcePayload};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AggregateFetcher, CacheSnapshot, CatalogService, SnapshotCache};

//! Domain models.

pub mod artist;
pub mod config;
pub mod detail;
pub mod query;

pub use artist::{
    Aggregate, Artist, ArtistId, DateEntry, DateIndex, LocationEntry, LocationIndex,
    RelationEntry, RelationIndex,
};
pub use config::{CacheConfig, Config, GeocodingConfig, ServerConfig, SourcesConfig};
pub use detail::{ArtistDetail, Event, GeoLocation};
pub use query::{FilterCriteria, SearchResult, Suggestion, SuggestionCategory};

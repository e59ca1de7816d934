//! Service layer: aggregate refresh, caching, and queries.

pub mod aggregate_fetcher;
pub mod artist_details;
pub mod catalog_service;
pub mod query_engine;
pub mod snapshot_cache;

pub use aggregate_fetcher::AggregateFetcher;
pub use catalog_service::CatalogService;
pub use snapshot_cache::{CacheSnapshot, SnapshotCache};

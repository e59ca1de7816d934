//! Service wiring from a loaded [`Config`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::models::Config;
use crate::domain::ports::SourceClient;
use crate::infrastructure::geocoding::build_geocoder;
use crate::infrastructure::sources::HttpSourceClient;
use crate::services::{AggregateFetcher, CatalogService, SnapshotCache};

/// Build the catalog and block until its first snapshot is published.
///
/// Fails when the initial refresh fails: there is nothing to serve yet.
pub async fn build_catalog(config: &Config) -> Result<Arc<CatalogService>> {
    let client: Arc<dyn SourceClient> = Arc::new(HttpSourceClient::new(config.sources.clone())?);
    let geocoder = build_geocoder(&config.geocoding)?;

    let ttl = Duration::from_secs(config.cache.ttl_secs);
    let cache = SnapshotCache::initialize(AggregateFetcher::new(client), ttl)
        .await
        .context("Failed to fetch initial data")?;

    info!(ttl_secs = config.cache.ttl_secs, "catalog ready");
    Ok(Arc::new(CatalogService::new(Arc::new(cache), geocoder)))
}

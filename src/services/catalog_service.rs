//! Caller-facing facade over the snapshot cache and the query engine.

use std::sync::Arc;

use tracing::instrument;

use super::artist_details::build_detail;
use super::query_engine;
use super::snapshot_cache::SnapshotCache;
use crate::domain::errors::{CatalogError, CatalogResult, QueryInputError, RefreshError};
use crate::domain::models::{Aggregate, ArtistDetail, ArtistId, FilterCriteria, SearchResult, Suggestion};
use crate::domain::ports::Geocoder;

/// Read-side entry point used by the HTTP layer and the CLI.
///
/// Every operation reads one snapshot from the cache (refreshing it first
/// when stale) and answers from that snapshot alone.
pub struct CatalogService {
    cache: Arc<SnapshotCache>,
    geocoder: Arc<dyn Geocoder>,
}

impl CatalogService {
    pub fn new(cache: Arc<SnapshotCache>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { cache, geocoder }
    }

    pub async fn get_snapshot(&self) -> Result<Arc<Aggregate>, RefreshError> {
        self.cache.read().await
    }

    #[instrument(skip(self, criteria))]
    pub async fn search(&self, query: &str, criteria: &FilterCriteria) -> CatalogResult<SearchResult> {
        let aggregate = self.get_snapshot().await?;
        Ok(query_engine::search(&aggregate, query, criteria))
    }

    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> CatalogResult<Vec<Suggestion>> {
        // Reject bad input before a read can trigger a refresh.
        if query.is_empty() {
            return Err(QueryInputError::EmptyQuery.into());
        }
        let aggregate = self.get_snapshot().await?;
        Ok(query_engine::suggest(&aggregate, query)?)
    }

    #[instrument(skip(self))]
    pub async fn artist_detail(&self, id: ArtistId) -> CatalogResult<ArtistDetail> {
        let aggregate = self.get_snapshot().await?;
        build_detail(&aggregate, id, self.geocoder.as_ref())
            .await
            .ok_or(CatalogError::ArtistNotFound(id))
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }
}

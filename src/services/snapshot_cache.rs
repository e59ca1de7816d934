//! Time-bounded cache over the most recent aggregate.
//!
//! The cache holds one snapshot behind a reader/writer lock. Staleness is
//! detected lazily: a read that finds the snapshot expired refreshes it
//! inline before answering. There is no background timer.
//!
//! Concurrent readers that all observe an expired snapshot each run their
//! own refresh. Every refresh publishes a complete aggregate, so the last
//! writer simply wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument};

use super::aggregate_fetcher::AggregateFetcher;
use crate::domain::errors::RefreshError;
use crate::domain::models::Aggregate;

/// An aggregate together with the instant it stops being fresh.
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    pub aggregate: Arc<Aggregate>,
    pub expires_at: Instant,
}

impl CacheSnapshot {
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }

    /// Time left before the snapshot goes stale, zero once it has.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

/// Aggregate cache with lazy TTL-based refresh.
pub struct SnapshotCache {
    fetcher: AggregateFetcher,
    ttl: Duration,
    current: RwLock<Option<CacheSnapshot>>,
    refresh_attempts: AtomicU64,
}

impl SnapshotCache {
    /// Create an empty cache. The first read performs the initial fetch.
    pub fn new(fetcher: AggregateFetcher, ttl: Duration) -> Self {
        Self {
            fetcher,
            ttl,
            current: RwLock::new(None),
            refresh_attempts: AtomicU64::new(0),
        }
    }

    /// Create a cache and block until the first snapshot is published.
    ///
    /// A failure here leaves nothing to serve, so callers treat it as fatal.
    pub async fn initialize(fetcher: AggregateFetcher, ttl: Duration) -> Result<Self, RefreshError> {
        let cache = Self::new(fetcher, ttl);
        cache.refresh().await?;
        info!(ttl_secs = ttl.as_secs(), "snapshot cache initialized");
        Ok(cache)
    }

    /// Current aggregate, refreshed first if it is missing or expired.
    pub async fn read(&self) -> Result<Arc<Aggregate>, RefreshError> {
        {
            let current = self.current.read().await;
            if let Some(snapshot) = current.as_ref() {
                if snapshot.is_fresh_at(Instant::now()) {
                    return Ok(Arc::clone(&snapshot.aggregate));
                }
            }
        }

        debug!("snapshot missing or stale, refreshing");
        self.refresh().await
    }

    /// Fetch a new aggregate and publish it.
    ///
    /// The fetch runs without holding the lock; only the swap is exclusive.
    /// On failure the stored snapshot and its expiry are left untouched.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Arc<Aggregate>, RefreshError> {
        self.refresh_attempts.fetch_add(1, Ordering::Relaxed);

        let aggregate = self
            .fetcher
            .fetch_all()
            .await
            .map(Arc::new)
            .inspect_err(|e| error!(error = %e, "snapshot refresh failed, keeping previous snapshot"))?;

        let mut current = self.current.write().await;
        *current = Some(CacheSnapshot {
            aggregate: Arc::clone(&aggregate),
            expires_at: Instant::now() + self.ttl,
        });
        drop(current);

        info!(artists = aggregate.artists.len(), "snapshot published");
        Ok(aggregate)
    }

    /// Stored snapshot, without refreshing it.
    pub async fn peek(&self) -> Option<CacheSnapshot> {
        self.current.read().await.clone()
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of refreshes started since construction, failed ones included.
    pub fn refresh_attempts(&self) -> u64 {
        self.refresh_attempts.load(Ordering::Relaxed)
    }
}

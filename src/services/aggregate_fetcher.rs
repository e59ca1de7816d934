//! Concurrent fan-out over the four remote sources.
//!
//! Each source is fetched on its own task. The first error observed ends the
//! run; an [`Aggregate`] is only assembled when all four payloads arrived.

use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{RefreshError, SourceKind};
use crate::domain::models::{Aggregate, Artist, DateIndex, LocationIndex, RelationIndex};
use crate::domain::ports::{SourceClient, SourcePayload};

/// Builds complete aggregates from a [`SourceClient`].
pub struct AggregateFetcher {
    client: Arc<dyn SourceClient>,
}

impl AggregateFetcher {
    pub fn new(client: Arc<dyn SourceClient>) -> Self {
        Self { client }
    }

    /// Fetch all four sources concurrently and join them into one aggregate.
    ///
    /// Returns as soon as one source fails. The other in-flight requests are
    /// detached rather than aborted, so they run to completion in the
    /// background and their results are discarded.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Aggregate, RefreshError> {
        let started = Instant::now();
        let mut tasks = JoinSet::new();

        for kind in SourceKind::ALL {
            let client = Arc::clone(&self.client);
            tasks.spawn(async move {
                client
                    .fetch(kind)
                    .await
                    .map_err(|error| RefreshError::Source { kind, error })
            });
        }

        let mut parts = PartialAggregate::default();

        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(|e| RefreshError::TaskFailed(e.to_string())).and_then(|r| r) {
                Ok(payload) => {
                    debug!(source = %payload.kind(), "source fetched");
                    parts.insert(payload);
                }
                Err(error) => {
                    warn!(error = %error, pending = tasks.len(), "source fetch failed");
                    // Still-running fetches finish unobserved; their payloads are dropped.
                    tasks.detach_all();
                    return Err(error);
                }
            }
        }

        let aggregate = parts.assemble()?;
        info!(
            artists = aggregate.artists.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "aggregate fetched"
        );
        Ok(aggregate)
    }
}

/// Payloads collected so far in one fetch run.
#[derive(Default)]
struct PartialAggregate {
    artists: Option<Vec<Artist>>,
    locations: Option<LocationIndex>,
    dates: Option<DateIndex>,
    relations: Option<RelationIndex>,
}

impl PartialAggregate {
    fn insert(&mut self, payload: SourcePayload) {
        match payload {
            SourcePayload::Artists(artists) => self.artists = Some(artists),
            SourcePayload::Locations(locations) => self.locations = Some(locations),
            SourcePayload::Dates(dates) => self.dates = Some(dates),
            SourcePayload::Relations(relations) => self.relations = Some(relations),
        }
    }

    fn assemble(self) -> Result<Aggregate, RefreshError> {
        // A client answering one kind with another kind's payload leaves a hole.
        let missing = |kind: SourceKind| {
            RefreshError::TaskFailed(format!("no {kind} payload was produced"))
        };

        Ok(Aggregate {
            artists: self.artists.ok_or_else(|| missing(SourceKind::Artists))?,
            locations: self.locations.ok_or_else(|| missing(SourceKind::Locations))?,
            dates: self.dates.ok_or_else(|| missing(SourceKind::Dates))?,
            relations: self.relations.ok_or_else(|| missing(SourceKind::Relations))?,
        })
    }
}

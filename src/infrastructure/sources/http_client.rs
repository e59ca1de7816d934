//! reqwest-backed source client for the remote artist API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::errors::{SourceError, SourceKind};
use crate::domain::models::SourcesConfig;
use crate::domain::ports::{SourceClient, SourcePayload};

/// Fetches the four datasets over HTTP GET.
///
/// One request per call. No retries, no authentication; the only deadline is
/// the client-wide timeout from [`SourcesConfig::timeout_secs`].
pub struct HttpSourceClient {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    config: SourcesConfig,
}

impl HttpSourceClient {
    pub fn new(config: SourcesConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Endpoint serving `kind`.
    pub fn url_for(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Artists => &self.config.artists_url,
            SourceKind::Locations => &self.config.locations_url,
            SourceKind::Dates => &self.config.dates_url,
            SourceKind::Relations => &self.config.relations_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::fetch(url, e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::fetch(url, format!("unexpected status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::fetch(url, e.without_url()))?;

        serde_json::from_slice(&body).map_err(|e| SourceError::decode(url, e))
    }
}

#[async_trait]
impl SourceClient for HttpSourceClient {
    #[instrument(skip(self))]
    async fn fetch(&self, kind: SourceKind) -> Result<SourcePayload, SourceError> {
        let url = self.url_for(kind);
        debug!(url = %url, "fetching source");

        Ok(match kind {
            SourceKind::Artists => SourcePayload::Artists(self.get_json(url).await?),
            SourceKind::Locations => SourcePayload::Locations(self.get_json(url).await?),
            SourceKind::Dates => SourcePayload::Dates(self.get_json(url).await?),
            SourceKind::Relations => SourcePayload::Relations(self.get_json(url).await?),
        })
    }
}

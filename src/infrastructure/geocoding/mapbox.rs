//! Mapbox places geocoder.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Url};
use serde::Deserialize;

use crate::domain::errors::GeocodeError;
use crate::domain::models::GeoLocation;
use crate::domain::ports::Geocoder;

/// Geocodes addresses with `GET {base_url}/{address}.json?access_token=...`.
pub struct MapboxGeocoder {
    http_client: ReqwestClient,
    base_url: Url,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    /// `[longitude, latitude]`
    center: [f64; 2],
}

impl MapboxGeocoder {
    pub fn new(base_url: &str, access_token: String, timeout: Duration) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid geocoding base URL: {base_url}"))?;

        Ok(Self {
            http_client,
            base_url,
            access_token,
        })
    }

    fn request_url(&self, address: &str) -> Result<Url, GeocodeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GeocodeError::Request("geocoding base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(&format!("{address}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, GeocodeError> {
        let url = self.request_url(address)?;

        // `without_url` keeps the access token out of error messages and logs.
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| GeocodeError::Request(e.without_url().to_string()))?;

        let places: PlacesResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Decode(e.without_url().to_string()))?;

        Ok(places.features.first().map(|feature| GeoLocation {
            address: address.to_string(),
            lon: feature.center[0],
            lat: feature.center[1],
        }))
    }
}

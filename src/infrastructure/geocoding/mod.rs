//! Geocoding adapters.

pub mod mapbox;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::domain::models::GeocodingConfig;
use crate::domain::ports::{Geocoder, NullGeocoder};

pub use mapbox::MapboxGeocoder;

/// Pick the geocoder for `config`: Mapbox when a token is configured,
/// otherwise the null geocoder.
pub fn build_geocoder(config: &GeocodingConfig) -> Result<Arc<dyn Geocoder>> {
    match config.access_token.as_deref().filter(|token| !token.is_empty()) {
        Some(token) => Ok(Arc::new(MapboxGeocoder::new(
            &config.base_url,
            token.to_string(),
            Duration::from_secs(config.timeout_secs),
        )?)),
        None => {
            info!("no geocoding access token configured, detail views will omit coordinates");
            Ok(Arc::new(NullGeocoder::new()))
        }
    }
}

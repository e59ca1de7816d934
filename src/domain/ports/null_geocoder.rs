//! Null geocoder implementation.
//!
//! Used when no geocoding credentials are configured: detail views are still
//! served, just without coordinates.

use async_trait::async_trait;

use super::geocoder::Geocoder;
use crate::domain::errors::GeocodeError;
use crate::domain::models::GeoLocation;

/// A geocoder that never finds anything.
#[derive(Debug, Clone, Default)]
pub struct NullGeocoder;

impl NullGeocoder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Geocoder for NullGeocoder {
    async fn geocode(&self, _address: &str) -> Result<Option<GeoLocation>, GeocodeError> {
        Ok(None)
    }
}

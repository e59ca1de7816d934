use async_trait::async_trait;

use crate::domain::errors::GeocodeError;
use crate::domain::models::GeoLocation;

/// Resolves free-text addresses to coordinates.
///
/// Lookups are best-effort. `Ok(None)` means the service had no match.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, GeocodeError>;
}

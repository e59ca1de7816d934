//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that infrastructure adapters implement:
//! - SourceClient: one remote dataset fetch + decode
//! - Geocoder: best-effort address lookup for detail views

pub mod geocoder;
pub mod null_geocoder;
pub mod source_client;

pub use geocoder::Geocoder;
pub use null_geocoder::NullGeocoder;
pub use source_client::{SourceClient, SourcePayload};

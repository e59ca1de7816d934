//! Domain layer for the groupie catalog
//!
//! Core data model, error taxonomy, and the ports the services depend on.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{
    CatalogError, CatalogResult, GeocodeError, QueryInputError, RefreshError, SourceError,
    SourceKind,
};

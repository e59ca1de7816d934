//! HTTP adapter exposing the catalog as a JSON API.

pub mod server;

pub use server::{CatalogHttpServer, ErrorResponse, HealthResponse};

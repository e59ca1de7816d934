//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - HTTP source client for the remote artist API
//! - Geocoding client
//! - Configuration management
//! - Logging infrastructure
//! - Service wiring
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod geocoding;
pub mod logging;
pub mod setup;
pub mod sources;

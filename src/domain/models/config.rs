use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;

/// Main configuration structure for groupie
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote source endpoints
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Snapshot cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Geocoding collaborator configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (0 picks an ephemeral port)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to answer cross-origin requests
    #[serde(default)]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
        }
    }
}

/// Remote source endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SourcesConfig {
    #[serde(default = "default_artists_url")]
    pub artists_url: String,

    #[serde(default = "default_locations_url")]
    pub locations_url: String,

    #[serde(default = "default_dates_url")]
    pub dates_url: String,

    #[serde(default = "default_relations_url")]
    pub relations_url: String,

    /// Per-request deadline in seconds
    #[serde(default = "default_source_timeout_secs")]
    pub timeout_secs: u64,
}

const API_BASE: &str = "https://groupietrackers.herokuapp.com/api";

fn default_artists_url() -> String {
    format!("{API_BASE}/artists")
}

fn default_locations_url() -> String {
    format!("{API_BASE}/locations")
}

fn default_dates_url() -> String {
    format!("{API_BASE}/dates")
}

fn default_relations_url() -> String {
    format!("{API_BASE}/relation")
}

const fn default_source_timeout_secs() -> u64 {
    30
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            artists_url: default_artists_url(),
            locations_url: default_locations_url(),
            dates_url: default_dates_url(),
            relations_url: default_relations_url(),
            timeout_secs: default_source_timeout_secs(),
        }
    }
}

impl SourcesConfig {
    /// All four endpoints served from one base URL, using the remote API's
    /// path layout.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            artists_url: format!("{base}/artists"),
            locations_url: format!("{base}/locations"),
            dates_url: format!("{base}/dates"),
            relations_url: format!("{base}/relation"),
            timeout_secs: default_source_timeout_secs(),
        }
    }
}

/// Snapshot cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Snapshot time-to-live in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

const fn default_ttl_secs() -> u64 {
    3600
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// Geocoding collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeocodingConfig {
    /// Mapbox places endpoint
    #[serde(default = "default_geocoding_url")]
    pub base_url: String,

    /// Mapbox access token; geocoding is disabled without one
    #[serde(default)]
    pub access_token: Option<String>,

    /// Per-request deadline in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoding_url() -> String {
    "https://api.mapbox.com/geocoding/v5/mapbox.places".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_url(),
            access_token: None,
            timeout_secs: default_geocoding_timeout_secs(),
        }
    }
}

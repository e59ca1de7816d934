//! JSON HTTP API over the catalog.
//!
//! Routes:
//! - `GET|POST /api/search?q=...` with an optional filter body
//! - `GET /api/suggestions?q=...`
//! - `GET /api/artist/{id}`
//! - `GET /health`

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::errors::CatalogError;
use crate::domain::models::{ArtistDetail, FilterCriteria, SearchResult, ServerConfig, Suggestion};
use crate::services::CatalogService;

/// HTTP server exposing the catalog.
pub struct CatalogHttpServer {
    catalog: Arc<CatalogService>,
    config: ServerConfig,
}

impl CatalogHttpServer {
    pub fn new(catalog: Arc<CatalogService>, config: ServerConfig) -> Self {
        Self { catalog, config }
    }

    /// Build the router with all endpoints.
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            .route("/api/search", get(search).post(search))
            .route("/api/suggestions", get(suggestions))
            .route("/api/artist/{id}", get(artist))
            .route("/health", get(health))
            .fallback(not_found)
            .with_state(Arc::clone(&self.catalog))
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        router
    }

    /// Start the server.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Catalog HTTP server listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Error response structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub artists: usize,
    pub snapshot_expires_in_secs: u64,
    pub refresh_attempts: u64,
}

/// Query parameters shared by search and suggestions.
#[derive(Debug, Deserialize)]
struct QueryParams {
    #[serde(default)]
    q: String,
}

/// An error already mapped to a status code and a client-safe message.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    error: &'static str,
    code: &'static str,
}

impl ApiError {
    const fn new(status: StatusCode, error: &'static str, code: &'static str) -> Self {
        Self { status, error, code }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.error.to_string(),
            code: self.code.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Unavailable(e) => {
                // Detail stays in the logs, clients get a generic answer.
                warn!(error = %e, "catalog read failed");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable",
                    "UNAVAILABLE",
                )
            }
            CatalogError::InvalidQuery(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Missing search query", "INVALID_QUERY")
            }
            CatalogError::ArtistNotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Artist not found", "NOT_FOUND")
            }
        }
    }
}

async fn search(
    State(catalog): State<Arc<CatalogService>>,
    Query(params): Query<QueryParams>,
    body: Bytes,
) -> Result<Json<SearchResult>, ApiError> {
    let criteria = if body.iter().all(u8::is_ascii_whitespace) {
        FilterCriteria::unrestricted()
    } else {
        serde_json::from_slice(&body).map_err(|_| {
            ApiError::new(StatusCode::BAD_REQUEST, "Invalid filter parameters", "INVALID_FILTERS")
        })?
    };

    let result = catalog.search(&params.q, &criteria).await?;
    Ok(Json(result))
}

async fn suggestions(
    State(catalog): State<Arc<CatalogService>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<Suggestion>>, ApiError> {
    let suggestions = catalog.suggest(&params.q).await?;
    Ok(Json(suggestions))
}

async fn artist(
    State(catalog): State<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> Result<Json<ArtistDetail>, ApiError> {
    let id = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "Invalid artist ID", "INVALID_ID"))?;

    let detail = catalog.artist_detail(id).await?;
    Ok(Json(detail))
}

async fn health(State(catalog): State<Arc<CatalogService>>) -> Json<HealthResponse> {
    let cache = catalog.cache();
    let snapshot = cache.peek().await;

    let (status, artists, expires_in) = match snapshot {
        Some(snapshot) => {
            let remaining = snapshot.remaining();
            let status = if remaining.is_zero() { "stale" } else { "ok" };
            (status, snapshot.aggregate.artists.len(), remaining.as_secs())
        }
        None => ("empty", 0, 0),
    };

    Json(HealthResponse {
        status: status.to_string(),
        artists,
        snapshot_expires_in_secs: expires_in,
        refresh_attempts: cache.refresh_attempts(),
    })
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Page Not Found", "NOT_FOUND")
}

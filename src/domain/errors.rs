//! Domain errors for the groupie catalog.

use std::fmt;

use thiserror::Error;

use super::models::ArtistId;

/// The four remote datasets that make up an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Artists,
    Locations,
    Dates,
    Relations,
}

impl SourceKind {
    /// Every source, in the order the aggregate lists them.
    pub const ALL: [Self; 4] = [Self::Artists, Self::Locations, Self::Dates, Self::Relations];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Locations => "locations",
            Self::Dates => "dates",
            Self::Relations => "relations",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single source request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source could not be reached or answered with an error status.
    #[error("failed to fetch data from {url}: {message}")]
    Fetch { url: String, message: String },

    /// The source answered but the payload did not have the expected shape.
    #[error("failed to decode data from {url}: {message}")]
    Decode { url: String, message: String },
}

impl SourceError {
    pub fn fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

/// Failure to assemble a fresh aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("{kind} source failed: {error}")]
    Source {
        kind: SourceKind,
        #[source]
        error: SourceError,
    },

    /// A fetch task panicked or was cancelled before reporting.
    #[error("source fetch task did not complete: {0}")]
    TaskFailed(String),
}

impl RefreshError {
    pub const fn source_kind(&self) -> Option<SourceKind> {
        match self {
            Self::Source { kind, .. } => Some(*kind),
            Self::TaskFailed(_) => None,
        }
    }
}

/// Caller supplied a query the engine cannot answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryInputError {
    #[error("missing search query")]
    EmptyQuery,
}

/// Errors surfaced by the catalog facade.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data unavailable: {0}")]
    Unavailable(#[from] RefreshError),

    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryInputError),

    #[error("artist not found: {0}")]
    ArtistNotFound(ArtistId),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure of a single geocoding lookup.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(String),

    #[error("geocoding response could not be decoded: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_error_names_failing_source() {
        let error = RefreshError::Source {
            kind: SourceKind::Dates,
            error: SourceError::fetch("http://localhost/api/dates", "connection refused"),
        };

        assert_eq!(error.source_kind(), Some(SourceKind::Dates));
        assert_eq!(
            error.to_string(),
            "dates source failed: failed to fetch data from http://localhost/api/dates: connection refused"
        );
    }

    #[test]
    fn test_catalog_error_conversions() {
        let error: CatalogError = QueryInputError::EmptyQuery.into();
        assert!(matches!(error, CatalogError::InvalidQuery(QueryInputError::EmptyQuery)));

        let error: CatalogError = RefreshError::TaskFailed("panicked".to_string()).into();
        assert!(matches!(error, CatalogError::Unavailable(_)));
    }
}

use async_trait::async_trait;

use crate::domain::errors::{SourceError, SourceKind};
use crate::domain::models::{Artist, DateIndex, LocationIndex, RelationIndex};

/// Decoded body of one source response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePayload {
    Artists(Vec<Artist>),
    Locations(LocationIndex),
    Dates(DateIndex),
    Relations(RelationIndex),
}

impl SourcePayload {
    /// Source this payload was decoded from.
    pub const fn kind(&self) -> SourceKind {
        match self {
            Self::Artists(_) => SourceKind::Artists,
            Self::Locations(_) => SourceKind::Locations,
            Self::Dates(_) => SourceKind::Dates,
            Self::Relations(_) => SourceKind::Relations,
        }
    }
}

/// Fetches and decodes one remote dataset per call.
///
/// Implementations are stateless between calls and never retry: a failed
/// request is reported as-is and the aggregate fetcher decides what to do.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Perform one request for `kind` and decode its payload.
    ///
    /// The returned payload variant must match `kind`.
    async fn fetch(&self, kind: SourceKind) -> Result<SourcePayload, SourceError>;
}

//! Shared error types for the services crate.

use thiserror::Error;

use roadmap_core::model::{ParseIdError, RoadmapError};

/// Errors surfaced by roadmap sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("roadmap not found")]
    NotFound,
    #[error("roadmap id was rejected by the source")]
    InvalidId,
    #[error("roadmap request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed roadmap document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("source unavailable: {0}")]
    Unavailable(String),
    #[error("{message}")]
    Generation {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Errors emitted by `RoadmapService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoadmapServiceError {
    #[error(transparent)]
    InvalidId(#[from] ParseIdError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Roadmap(#[from] RoadmapError),
    #[error("roadmap generation needs an HTTP roadmap source")]
    GenerationUnavailable,
}

impl RoadmapServiceError {
    /// True when the roadmap does not exist, whether or not the id was well formed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::InvalidId(_) | Self::Source(SourceError::NotFound | SourceError::InvalidId)
        )
    }
}

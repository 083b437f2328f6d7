use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roadmap_core::model::{RoadmapDocument, RoadmapId};

use crate::error::SourceError;

mod file;
mod http;

pub use file::FileRoadmapSource;
pub use http::HttpRoadmapSource;

/// Contract for anything that can hand out stored roadmaps.
#[async_trait]
pub trait RoadmapSource: Send + Sync {
    /// Fetch a stored roadmap document by id.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotFound` if the roadmap does not exist, or other
    /// source errors for transport and decoding failures.
    async fn fetch(&self, id: &RoadmapId) -> Result<RoadmapDocument, SourceError>;
}

/// Decode one roadmap document from JSON text.
pub(crate) fn parse_document(body: &str) -> Result<RoadmapDocument, SourceError> {
    Ok(serde_json::from_str(body)?)
}

/// Simple in-memory source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRoadmapSource {
    documents: Arc<Mutex<HashMap<RoadmapId, RoadmapDocument>>>,
}

impl InMemoryRoadmapSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document under `id`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the lock is poisoned.
    pub fn insert(&self, id: RoadmapId, document: RoadmapDocument) -> Result<(), SourceError> {
        let mut guard = self
            .documents
            .lock()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        guard.insert(id, document);
        Ok(())
    }
}

#[async_trait]
impl RoadmapSource for InMemoryRoadmapSource {
    async fn fetch(&self, id: &RoadmapId) -> Result<RoadmapDocument, SourceError> {
        let guard = self
            .documents
            .lock()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        guard.get(id).cloned().ok_or(SourceError::NotFound)
    }
}

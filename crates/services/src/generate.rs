use async_trait::async_trait;
use roadmap_core::model::{Level, RoadmapId};
use serde::Serialize;

use crate::error::SourceError;

/// Body of a generation request: `{ "field": ..., "level": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub field: String,
    pub level: Level,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(field: impl Into<String>, level: Level) -> Self {
        Self {
            field: field.into(),
            level,
        }
    }
}

/// Asks a backend to generate and store a roadmap, returning the stored id.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<RoadmapId, SourceError>;
}

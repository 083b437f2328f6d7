use std::path::Path;
use std::sync::Arc;

use roadmap_core::model::{Level, Roadmap, RoadmapDocument, RoadmapError, RoadmapId};
use tracing::{debug, info};

use crate::error::RoadmapServiceError;
use crate::generate::{GenerateRequest, RoadmapGenerator};
use crate::source::{FileRoadmapSource, RoadmapSource};

/// Loads stored roadmaps and checks them before they reach the viewer.
///
/// Documents from any source are validated here, so everything downstream
/// (including the progress tracker) can rely on well-formed sections.
#[derive(Clone)]
pub struct RoadmapService {
    source: Arc<dyn RoadmapSource>,
    generator: Option<Arc<dyn RoadmapGenerator>>,
}

impl RoadmapService {
    #[must_use]
    pub fn new(source: Arc<dyn RoadmapSource>) -> Self {
        Self {
            source,
            generator: None,
        }
    }

    #[must_use]
    pub fn with_generator(mut self, generator: Arc<dyn RoadmapGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.generator.is_some()
    }

    /// Ask the backend to generate a roadmap for `field` at `level`.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::EmptyField` for a blank field,
    /// `GenerationUnavailable` when no generator is configured, or the
    /// generator's `SourceError`.
    pub async fn generate(
        &self,
        field: &str,
        level: Level,
    ) -> Result<RoadmapId, RoadmapServiceError> {
        let field = field.trim();
        if field.is_empty() {
            return Err(RoadmapError::EmptyField.into());
        }
        let generator = self
            .generator
            .as_ref()
            .ok_or(RoadmapServiceError::GenerationUnavailable)?;

        info!(field, level = level.as_str(), "generating roadmap");
        let id = generator.generate(&GenerateRequest::new(field, level)).await?;
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns `RoadmapServiceError::InvalidId` if `raw` is not a valid id.
    pub fn parse_id(raw: &str) -> Result<RoadmapId, RoadmapServiceError> {
        Ok(RoadmapId::parse(raw)?)
    }

    /// Parse `raw_id` and load the roadmap it names.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapServiceError` if the id is invalid, the source fails,
    /// or the document is structurally invalid.
    pub async fn load(&self, raw_id: &str) -> Result<Roadmap, RoadmapServiceError> {
        let id = Self::parse_id(raw_id)?;
        self.get(&id).await
    }

    /// Fetch and validate one roadmap.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapServiceError` if the source fails or the document is invalid.
    pub async fn get(&self, id: &RoadmapId) -> Result<Roadmap, RoadmapServiceError> {
        debug!(%id, "loading roadmap");
        let mut document = self.source.fetch(id).await?;
        // Older exports omit `_id`; the id the document was requested with is authoritative.
        if document.id.is_none() {
            document.id = Some(id.clone());
        }
        let roadmap = into_roadmap(document)?;
        Ok(roadmap)
    }

    /// Load a single exported document from disk.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapServiceError` if the file cannot be read or is invalid.
    pub async fn load_file(path: &Path) -> Result<Roadmap, RoadmapServiceError> {
        let document = FileRoadmapSource::load_path(path).await?;
        into_roadmap(document)
    }
}

fn into_roadmap(document: RoadmapDocument) -> Result<Roadmap, RoadmapServiceError> {
    let roadmap = document.into_roadmap()?;
    info!(
        field = roadmap.field_of_study(),
        level = roadmap.level().as_str(),
        sections = roadmap.sections().len(),
        topics = roadmap.total_topics(),
        "roadmap loaded"
    );
    Ok(roadmap)
}

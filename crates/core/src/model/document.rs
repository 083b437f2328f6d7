use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::RoadmapId;
use crate::model::level::Level;
use crate::model::roadmap::{Roadmap, RoadmapError, Section};

/// Wire shape of a stored roadmap as returned by the retrieval endpoint.
///
/// Store bookkeeping such as `__v` is ignored. Convert into a [`Roadmap`]
/// before handing it to anything that relies on its structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RoadmapId>,
    pub field_of_study: String,
    pub level: Level,
    #[serde(rename = "roadmap")]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RoadmapDocument {
    #[must_use]
    pub fn from_roadmap(roadmap: &Roadmap) -> Self {
        Self {
            id: roadmap.id().cloned(),
            field_of_study: roadmap.field_of_study().to_string(),
            level: roadmap.level(),
            sections: roadmap.sections().to_vec(),
            created_at: roadmap.created_at(),
            updated_at: None,
        }
    }

    /// Validate the document and convert it into a domain `Roadmap`.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError` if the document violates roadmap invariants.
    pub fn into_roadmap(self) -> Result<Roadmap, RoadmapError> {
        Roadmap::from_persisted(
            self.id,
            self.field_of_study,
            self.level,
            self.sections,
            self.created_at,
        )
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::RoadmapId;
use crate::model::level::Level;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoadmapError {
    #[error("field of study cannot be empty")]
    EmptyField,

    #[error("roadmap must contain at least one section")]
    NoSections,

    #[error("section {index} has no steps")]
    EmptySection { index: usize },
}

//
// ─── STRUCTURE ─────────────────────────────────────────────────────────────────
//

/// An ordered unit of study. Its position in the section defines unlock order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    title: String,
    topics: Vec<String>,
}

impl Step {
    #[must_use]
    pub fn new(title: impl Into<String>, topics: Vec<String>) -> Self {
        Self {
            title: title.into(),
            topics,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}

/// A named group of steps, e.g. one difficulty tier of a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    title: String,
    steps: Vec<Step>,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            title: title.into(),
            steps,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn total_topics(&self) -> usize {
        self.steps.iter().map(|step| step.topics.len()).sum()
    }

    /// Display tier of this section when shown at `index` within its roadmap.
    #[must_use]
    pub fn tier(&self, index: usize) -> Level {
        Level::for_section(&self.title, index)
    }
}

//
// ─── ROADMAP ───────────────────────────────────────────────────────────────────
//

/// A validated learning roadmap.
///
/// Construction guarantees a non-blank field of study, at least one section,
/// and at least one step per section. Steps may still have no topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    id: Option<RoadmapId>,
    field_of_study: String,
    level: Level,
    sections: Vec<Section>,
    created_at: Option<DateTime<Utc>>,
}

impl Roadmap {
    /// Creates a roadmap that has not been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError` if the field is blank, there are no sections,
    /// or any section has no steps.
    pub fn new(
        field_of_study: impl Into<String>,
        level: Level,
        sections: Vec<Section>,
    ) -> Result<Self, RoadmapError> {
        let field_of_study = field_of_study.into();
        Self::validate(&field_of_study, &sections)?;
        Ok(Self {
            id: None,
            field_of_study: field_of_study.trim().to_string(),
            level,
            sections,
            created_at: None,
        })
    }

    /// Rehydrates a roadmap fetched from the document store.
    ///
    /// # Errors
    ///
    /// Same validation as [`Roadmap::new`].
    pub fn from_persisted(
        id: Option<RoadmapId>,
        field_of_study: String,
        level: Level,
        sections: Vec<Section>,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self, RoadmapError> {
        let mut roadmap = Self::new(field_of_study, level, sections)?;
        roadmap.id = id;
        roadmap.created_at = created_at;
        Ok(roadmap)
    }

    /// Checks the structural invariants shared by every roadmap.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(field_of_study: &str, sections: &[Section]) -> Result<(), RoadmapError> {
        if field_of_study.trim().is_empty() {
            return Err(RoadmapError::EmptyField);
        }
        if sections.is_empty() {
            return Err(RoadmapError::NoSections);
        }
        if let Some(index) = sections.iter().position(|s| s.steps.is_empty()) {
            return Err(RoadmapError::EmptySection { index });
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> Option<&RoadmapId> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn field_of_study(&self) -> &str {
        &self.field_of_study
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    #[must_use]
    pub fn total_topics(&self) -> usize {
        self.sections.iter().map(Section::total_topics).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(title: &str, topics: &[&str]) -> Step {
        Step::new(title, topics.iter().map(ToString::to_string).collect())
    }

    fn basics() -> Section {
        Section::new(
            "Basics",
            vec![step("S1", &["A", "B"]), step("S2", &["C"])],
        )
    }

    #[test]
    fn new_roadmap_trims_field() {
        let roadmap = Roadmap::new("  Rust  ", Level::Basic, vec![basics()]).unwrap();
        assert_eq!(roadmap.field_of_study(), "Rust");
        assert_eq!(roadmap.total_topics(), 3);
        assert!(roadmap.id().is_none());
    }

    #[test]
    fn rejects_blank_field() {
        let err = Roadmap::new("   ", Level::Basic, vec![basics()]).unwrap_err();
        assert_eq!(err, RoadmapError::EmptyField);
    }

    #[test]
    fn rejects_empty_roadmap() {
        let err = Roadmap::new("Rust", Level::Basic, Vec::new()).unwrap_err();
        assert_eq!(err, RoadmapError::NoSections);
    }

    #[test]
    fn rejects_section_without_steps() {
        let sections = vec![basics(), Section::new("Empty", Vec::new())];
        let err = Roadmap::new("Rust", Level::Advanced, sections).unwrap_err();
        assert_eq!(err, RoadmapError::EmptySection { index: 1 });
    }

    #[test]
    fn allows_steps_without_topics() {
        let section = Section::new("Odd", vec![step("Nothing yet", &[])]);
        let roadmap = Roadmap::new("Rust", Level::Basic, vec![section]).unwrap();
        assert_eq!(roadmap.total_topics(), 0);
    }

    #[test]
    fn section_tier_uses_position_and_title() {
        let section = Section::new("Advanced Techniques", vec![step("S", &["x"])]);
        assert_eq!(section.tier(0), Level::Basic);
        assert_eq!(section.tier(2), Level::Advanced);
    }
}

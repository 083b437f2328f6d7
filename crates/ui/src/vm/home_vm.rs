use roadmap_core::model::{Level, RoadmapError};
use services::{RoadmapServiceError, SourceError};

use crate::vm::section_vm::tier_class;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelOptionVm {
    pub level: Level,
    pub label: &'static str,
    pub hint: &'static str,
    pub class: &'static str,
    pub selected: bool,
}

fn level_hint(level: Level) -> &'static str {
    match level {
        Level::Basic => "Fundamentals & core concepts",
        Level::Intermediate => "Advanced topics & skills",
        Level::Advanced => "Expert knowledge & mastery",
    }
}

#[must_use]
pub fn map_level_options(selected: Level) -> Vec<LevelOptionVm> {
    Level::ALL
        .into_iter()
        .map(|level| LevelOptionVm {
            level,
            label: level.as_str(),
            hint: level_hint(level),
            class: tier_class(level),
            selected: level == selected,
        })
        .collect()
}

/// User-facing text for a failed generation request.
#[must_use]
pub fn generation_error_message(err: &RoadmapServiceError) -> String {
    match err {
        RoadmapServiceError::Roadmap(RoadmapError::EmptyField) => {
            "Enter a field of study first.".to_string()
        }
        RoadmapServiceError::GenerationUnavailable => {
            "Generating roadmaps needs an HTTP roadmap source.".to_string()
        }
        RoadmapServiceError::Source(SourceError::Generation { message, .. }) => {
            format!("Error: {message}")
        }
        _ => "Failed to generate roadmap. Please try again.".to_string(),
    }
}

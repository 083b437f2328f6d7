use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Proficiency level a roadmap is generated for.
///
/// Also used as the display tier of a single section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level: {0:?} (expected Basic, Intermediate or Advanced)")]
pub struct ParseLevelError(String);

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Intermediate, Level::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Derives the display tier of a section from its title and position.
    ///
    /// The first section is always `Basic` and the second is at most
    /// `Intermediate`; later sections are classified by title keywords.
    #[must_use]
    pub fn for_section(title: &str, index: usize) -> Self {
        let title = title.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| title.contains(n));

        if index == 0 || has(&["fundamental", "basic", "introduction"]) {
            Level::Basic
        } else if index == 1 || has(&["intermediate", "building"]) {
            Level::Intermediate
        } else {
            Level::Advanced
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

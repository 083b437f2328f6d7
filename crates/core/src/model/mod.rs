mod document;
mod ids;
mod level;
mod roadmap;

pub use document::RoadmapDocument;
pub use ids::{ParseIdError, RoadmapId};
pub use level::{Level, ParseLevelError};
pub use roadmap::{Roadmap, RoadmapError, Section, Step};

use std::fmt;

use roadmap_core::model::Roadmap;
use roadmap_core::{ProgressTracker, TopicStatus};

use crate::vm::section_vm::map_section;
use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapHeaderVm {
    pub field: String,
    pub level_label: String,
    pub summary: String,
    pub created_label: Option<String>,
}

#[must_use]
pub fn map_roadmap_header(roadmap: &Roadmap) -> RoadmapHeaderVm {
    let sections = roadmap.sections().len();
    let topics = roadmap.total_topics();
    let plural = |n: usize, word: &str| {
        if n == 1 {
            format!("{n} {word}")
        } else {
            format!("{n} {word}s")
        }
    };

    RoadmapHeaderVm {
        field: roadmap.field_of_study().to_string(),
        level_label: format!("{} roadmap", roadmap.level()),
        summary: format!("{} · {}", plural(sections, "section"), plural(topics, "topic")),
        created_label: roadmap
            .created_at()
            .map(|at| format!("Generated {}", format_date(at))),
    }
}

fn status_marker(status: TopicStatus) -> &'static str {
    match status {
        TopicStatus::NotStarted => "[ ]",
        TopicStatus::InProgress => "[~]",
        TopicStatus::Completed => "[x]",
    }
}

/// Plain-text rendering of a roadmap with fresh progress, for terminals.
#[must_use]
pub fn render_roadmap_text(roadmap: &Roadmap) -> String {
    RoadmapText(roadmap).to_string()
}

struct RoadmapText<'a>(&'a Roadmap);

impl fmt::Display for RoadmapText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roadmap = self.0;
        let header = map_roadmap_header(roadmap);

        writeln!(f, "{} ({})", header.field, header.level_label)?;
        writeln!(f, "{}", header.summary)?;
        if let Some(created) = &header.created_label {
            writeln!(f, "{created}")?;
        }

        for (index, section) in roadmap.sections().iter().enumerate() {
            let tracker = ProgressTracker::new(section);
            let vm = map_section(section, index, &tracker);

            writeln!(f)?;
            writeln!(f, "## {} [{}] {}", vm.title, vm.tier, vm.percentage_label)?;
            for step in &vm.steps {
                write!(f, "  {}. {}", step.number, step.title)?;
                match step.lock_hint {
                    Some(hint) => writeln!(f, " (locked: {hint})")?,
                    None => writeln!(f)?,
                }
                for topic in &step.topics {
                    writeln!(f, "     {} {}", status_marker(topic.status), topic.title)?;
                }
            }
        }
        Ok(())
    }
}

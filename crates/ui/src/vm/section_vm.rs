use roadmap_core::model::{Level, Section};
use roadmap_core::{ProgressBreakdown, ProgressTracker, TopicStatus};

pub const LOCK_HINT: &str = "Complete previous step";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartSliceVm {
    pub label: &'static str,
    pub value: usize,
    pub share_pct: usize,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicVm {
    pub step: usize,
    pub index: usize,
    pub title: String,
    pub status: TopicStatus,
    pub class: &'static str,
    /// Only topics of unlocked steps react to clicks.
    pub clickable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub index: usize,
    pub number: usize,
    pub title: String,
    pub unlocked: bool,
    pub lock_hint: Option<&'static str>,
    pub topics: Vec<TopicVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub title: String,
    pub tier: Level,
    pub tier_label: String,
    pub tier_class: &'static str,
    pub bar_color: &'static str,
    pub percentage: u8,
    pub percentage_label: String,
    pub breakdown: ProgressBreakdown,
    pub slices: Vec<ChartSliceVm>,
    pub steps: Vec<StepVm>,
}

#[must_use]
pub fn tier_class(tier: Level) -> &'static str {
    match tier {
        Level::Basic => "tier-basic",
        Level::Intermediate => "tier-intermediate",
        Level::Advanced => "tier-advanced",
    }
}

#[must_use]
pub fn tier_color(tier: Level) -> &'static str {
    match tier {
        Level::Basic => "#10b981",
        Level::Intermediate => "#3b82f6",
        Level::Advanced => "#8b5cf6",
    }
}

#[must_use]
pub fn status_class(status: TopicStatus) -> &'static str {
    match status {
        TopicStatus::NotStarted => "topic-not-started",
        TopicStatus::InProgress => "topic-in-progress",
        TopicStatus::Completed => "topic-completed",
    }
}

fn status_color(status: TopicStatus) -> &'static str {
    match status {
        TopicStatus::Completed => "#10b981",
        TopicStatus::InProgress => "#3b82f6",
        TopicStatus::NotStarted => "#d1d5db",
    }
}

/// Chart slices for a breakdown. Empty categories are left out.
#[must_use]
pub fn map_breakdown_slices(breakdown: ProgressBreakdown) -> Vec<ChartSliceVm> {
    let total = breakdown.total();
    [
        (TopicStatus::Completed, breakdown.completed),
        (TopicStatus::InProgress, breakdown.in_progress),
        (TopicStatus::NotStarted, breakdown.not_started),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0)
    .map(|(status, value)| ChartSliceVm {
        label: status.label(),
        value,
        share_pct: value * 100 / total,
        color: status_color(status),
    })
    .collect()
}

#[must_use]
pub fn map_section(section: &Section, section_index: usize, tracker: &ProgressTracker) -> SectionVm {
    let tier = section.tier(section_index);
    let breakdown = tracker.progress_breakdown();
    let percentage = tracker.completion_percentage();

    let steps = section
        .steps()
        .iter()
        .enumerate()
        .map(|(step_index, step)| {
            let unlocked = tracker.is_step_unlocked(step_index);
            let topics = step
                .topics()
                .iter()
                .enumerate()
                .map(|(topic_index, title)| {
                    let status = tracker.topic_status(step_index, topic_index);
                    TopicVm {
                        step: step_index,
                        index: topic_index,
                        title: title.clone(),
                        status,
                        class: status_class(status),
                        clickable: unlocked,
                    }
                })
                .collect();
            StepVm {
                index: step_index,
                number: step_index + 1,
                title: step.title().to_string(),
                unlocked,
                lock_hint: (!unlocked).then_some(LOCK_HINT),
                topics,
            }
        })
        .collect();

    SectionVm {
        title: section.title().to_string(),
        tier,
        tier_label: format!("{tier} level content"),
        tier_class: tier_class(tier),
        bar_color: tier_color(tier),
        percentage,
        percentage_label: format!("{percentage}%"),
        breakdown,
        slices: map_breakdown_slices(breakdown),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::model::Step;

    fn basics() -> Section {
        Section::new(
            "Basics",
            vec![
                Step::new("S1", vec!["A".into(), "B".into()]),
                Step::new("S2", vec!["C".into()]),
            ],
        )
    }

    #[test]
    fn fresh_section_shows_locked_followers() {
        let section = basics();
        let tracker = ProgressTracker::new(&section);
        let vm = map_section(&section, 0, &tracker);

        assert_eq!(vm.tier, Level::Basic);
        assert_eq!(vm.tier_label, "Basic level content");
        assert_eq!(vm.percentage_label, "0%");
        assert!(vm.steps[0].unlocked);
        assert_eq!(vm.steps[0].lock_hint, None);
        assert!(!vm.steps[1].unlocked);
        assert_eq!(vm.steps[1].lock_hint, Some(LOCK_HINT));
        assert_eq!(vm.steps[1].number, 2);
        assert_eq!(vm.steps[0].topics[1].class, "topic-not-started");
        assert!(vm.steps[0].topics.iter().all(|topic| topic.clickable));
        assert!(!vm.steps[1].topics[0].clickable);
    }

    #[test]
    fn reflects_tracker_progress() {
        let section = basics();
        let mut tracker = ProgressTracker::new(&section);
        for topic in 0..2 {
            tracker.cycle_topic_status(0, topic);
            tracker.cycle_topic_status(0, topic);
        }
        tracker.cycle_topic_status(1, 0);

        let vm = map_section(&section, 2, &tracker);
        assert_eq!(vm.tier, Level::Advanced);
        assert_eq!(vm.bar_color, "#8b5cf6");
        assert_eq!(vm.percentage, 67);
        assert!(vm.steps[1].unlocked);
        assert!(vm.steps[1].topics[0].clickable);
        assert_eq!(vm.steps[1].topics[0].status, TopicStatus::InProgress);
        assert_eq!(vm.steps[0].topics[0].class, "topic-completed");
    }

    #[test]
    fn breakdown_slices_skip_empty_categories() {
        let slices = map_breakdown_slices(ProgressBreakdown {
            completed: 1,
            in_progress: 0,
            not_started: 3,
        });
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Completed");
        assert_eq!(slices[0].share_pct, 25);
        assert_eq!(slices[1].label, "Not Started");
        assert_eq!(slices[1].color, "#d1d5db");
    }

    #[test]
    fn breakdown_slices_empty_for_topicless_section() {
        assert!(map_breakdown_slices(ProgressBreakdown::default()).is_empty());
    }
}

//! Per-section topic progress and step unlocking.
//!
//! A [`ProgressTracker`] is created when a section is displayed and dropped
//! with it; nothing here is persisted. Step unlocking is a one-way ratchet:
//! a step unlocks once its predecessor is fully completed and stays unlocked
//! even if topics in the predecessor are later cycled back.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::model::Section;

/// Completion status of a single topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopicStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TopicStatus {
    /// Next status in the fixed cycle `not-started → in-progress → completed → not-started`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            TopicStatus::NotStarted => TopicStatus::InProgress,
            TopicStatus::InProgress => TopicStatus::Completed,
            TopicStatus::Completed => TopicStatus::NotStarted,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TopicStatus::NotStarted => "not-started",
            TopicStatus::InProgress => "in-progress",
            TopicStatus::Completed => "completed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TopicStatus::NotStarted => "Not Started",
            TopicStatus::InProgress => "In Progress",
            TopicStatus::Completed => "Completed",
        }
    }
}

/// Position of a topic within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicKey {
    pub step: usize,
    pub topic: usize,
}

impl TopicKey {
    #[must_use]
    pub fn new(step: usize, topic: usize) -> Self {
        Self { step, topic }
    }
}

/// Topic counts by status. Always sums to the section's topic count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressBreakdown {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl ProgressBreakdown {
    #[must_use]
    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.not_started
    }
}

/// Tracks topic statuses and step unlock flags for one displayed section.
///
/// Only the section's shape (topic count per step) is kept, so the tracker
/// owns no borrowed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    topic_counts: Vec<usize>,
    statuses: HashMap<TopicKey, TopicStatus>,
    unlocked: Vec<bool>,
}

impl ProgressTracker {
    /// Creates a tracker initialized for `section`.
    #[must_use]
    pub fn new(section: &Section) -> Self {
        let mut tracker = Self {
            topic_counts: Vec::new(),
            statuses: HashMap::new(),
            unlocked: Vec::new(),
        };
        tracker.initialize(section);
        tracker
    }

    /// Resets all state for `section`: statuses are cleared and only the
    /// first step is unlocked (plus any steps reachable through empty steps).
    pub fn initialize(&mut self, section: &Section) {
        self.topic_counts = section
            .steps()
            .iter()
            .map(|step| step.topics().len())
            .collect();
        self.statuses.clear();
        self.unlocked = vec![false; self.topic_counts.len()];
        self.unlock(0);
    }

    /// Advances the status of one topic if its step is unlocked.
    ///
    /// Returns the new status, or `None` when the click was ignored because
    /// the step is locked or the key does not exist.
    pub fn cycle_topic_status(&mut self, step: usize, topic: usize) -> Option<TopicStatus> {
        if !self.is_step_unlocked(step) || topic >= self.topic_counts[step] {
            debug!(step, topic, "ignoring click on locked or unknown topic");
            return None;
        }

        let key = TopicKey::new(step, topic);
        let next = self.topic_status(step, topic).next();
        if next == TopicStatus::NotStarted {
            self.statuses.remove(&key);
        } else {
            self.statuses.insert(key, next);
        }
        debug!(step, topic, status = next.as_str(), "topic status cycled");

        if next == TopicStatus::Completed && self.is_step_completed(step) {
            self.unlock(step + 1);
        }
        Some(next)
    }

    /// Status of a topic, `NotStarted` if it was never clicked.
    #[must_use]
    pub fn topic_status(&self, step: usize, topic: usize) -> TopicStatus {
        self.statuses
            .get(&TopicKey::new(step, topic))
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_step_unlocked(&self, step: usize) -> bool {
        self.unlocked.get(step).copied().unwrap_or(false)
    }

    /// True when every topic of `step` is completed (vacuously for empty steps).
    #[must_use]
    pub fn is_step_completed(&self, step: usize) -> bool {
        self.topic_counts.get(step).is_some_and(|&count| {
            (0..count).all(|topic| self.topic_status(step, topic) == TopicStatus::Completed)
        })
    }

    #[must_use]
    pub fn unlocked_steps(&self) -> &[bool] {
        &self.unlocked
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.topic_counts.len()
    }

    #[must_use]
    pub fn total_topics(&self) -> usize {
        self.topic_counts.iter().sum()
    }

    #[must_use]
    pub fn completed_topics(&self) -> usize {
        self.statuses
            .values()
            .filter(|status| **status == TopicStatus::Completed)
            .count()
    }

    /// Completed share of all topics in the section, rounded half up to a
    /// whole percent. Zero when the section has no topics.
    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        let total = self.total_topics();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_topics();
        let rounded = (200 * completed + total) / (2 * total);
        u8::try_from(rounded).unwrap_or(100)
    }

    #[must_use]
    pub fn progress_breakdown(&self) -> ProgressBreakdown {
        let mut breakdown = ProgressBreakdown {
            not_started: self.total_topics(),
            ..ProgressBreakdown::default()
        };
        for status in self.statuses.values() {
            match status {
                TopicStatus::Completed => breakdown.completed += 1,
                TopicStatus::InProgress => breakdown.in_progress += 1,
                TopicStatus::NotStarted => continue,
            }
            breakdown.not_started -= 1;
        }
        breakdown
    }

    /// Unlocks `step` and keeps going while the newly unlocked step has no
    /// topics, since an empty step is complete as soon as it is reachable.
    fn unlock(&mut self, step: usize) {
        let mut index = step;
        while let Some(flag) = self.unlocked.get_mut(index) {
            if *flag {
                break;
            }
            *flag = true;
            info!(step = index, "step unlocked");
            if self.topic_counts[index] != 0 {
                break;
            }
            index += 1;
        }
    }
}

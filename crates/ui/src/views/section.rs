use dioxus::prelude::*;
use roadmap_core::ProgressTracker;
use roadmap_core::model::Section;

use crate::vm::{ChartSliceVm, LOCK_HINT, map_section};

/// One roadmap section with its own progress tracker.
///
/// Progress lives only as long as the component is mounted.
#[component]
pub fn RoadmapSection(section: Section, section_index: usize) -> Element {
    let init_section = section.clone();
    let mut tracker = use_signal(move || ProgressTracker::new(&init_section));
    let mut expanded = use_signal(|| true);
    let mut show_breakdown = use_signal(|| false);

    let vm = map_section(&section, section_index, &tracker.read());

    rsx! {
        div { class: "section",
            div { class: "section-header",
                div { class: "section-progress",
                    div { class: "section-title-row",
                        h2 { "{vm.title}" }
                        span { class: "section-percentage", "{vm.percentage_label}" }
                    }
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {vm.percentage}%; background-color: {vm.bar_color};",
                        }
                    }
                    p { class: "section-tier {vm.tier_class}", "{vm.tier_label}" }
                }
                div { class: "section-actions",
                    button {
                        class: if show_breakdown() { "toggle active" } else { "toggle" },
                        r#type: "button",
                        onclick: move |_| show_breakdown.toggle(),
                        "Breakdown"
                    }
                    button {
                        class: if expanded() { "toggle" } else { "toggle active" },
                        r#type: "button",
                        onclick: move |_| expanded.toggle(),
                        if expanded() { "Collapse" } else { "Expand" }
                    }
                }
            }

            if show_breakdown() {
                BreakdownPanel { slices: vm.slices.clone() }
            }

            if expanded() {
                div { class: "steps",
                    for step in vm.steps {
                        div {
                            key: "{step.index}",
                            class: if step.unlocked { "step" } else { "step locked" },
                            div { class: "step-header",
                                h3 {
                                    span { class: "step-number {vm.tier_class}", "{step.number}" }
                                    "{step.title}"
                                }
                                if !step.unlocked {
                                    span { class: "step-lock", "Locked · {LOCK_HINT}" }
                                }
                            }
                            ul { class: "topics",
                                for topic in step.topics {
                                    li {
                                        key: "{topic.index}",
                                        class: "topic {topic.class}",
                                        class: if !topic.clickable { "locked" },
                                        onclick: move |_| {
                                            if topic.clickable {
                                                tracker.write().cycle_topic_status(topic.step, topic.index);
                                            }
                                        },
                                        span { class: "topic-marker" }
                                        span { class: "topic-title", "{topic.title}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BreakdownPanel(slices: Vec<ChartSliceVm>) -> Element {
    rsx! {
        div { class: "breakdown",
            div { class: "breakdown-bar",
                for slice in slices.iter() {
                    div {
                        key: "{slice.label}",
                        class: "breakdown-slice",
                        style: "width: {slice.share_pct}%; background-color: {slice.color};",
                        title: "{slice.value} topics",
                    }
                }
            }
            ul { class: "breakdown-legend",
                for slice in slices.iter() {
                    li { key: "{slice.label}",
                        span {
                            class: "legend-dot",
                            style: "background-color: {slice.color};",
                        }
                        "{slice.label}: {slice.value}"
                    }
                }
            }
        }
    }
}

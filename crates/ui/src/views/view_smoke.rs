use std::sync::Arc;

use dioxus::prelude::*;
use roadmap_core::model::{RoadmapDocument, RoadmapId, Section, Step};
use services::{
    GenerateRequest, InMemoryRoadmapSource, RoadmapGenerator, RoadmapSource, SourceError,
};

use super::section::RoadmapSection;
use super::test_harness::{
    ViewKind, drive_dom, empty_source, setup_generating_harness, setup_view_harness,
};

const ID: &str = "65f1c2a9e4b0a1b2c3d4e5f6";
const OTHER_ID: &str = "65f1c2a9e4b0a1b2c3d4e5f7";

const OTHER: &str = r#"{
    "fieldOfStudy": "Cloud Computing",
    "level": "Advanced",
    "roadmap": [
        { "title": "Introduction to Cloud", "steps": [
            { "title": "Providers", "topics": ["Regions"] }
        ] }
    ]
}"#;

const STORED: &str = r#"{
    "fieldOfStudy": "Data Science",
    "level": "Basic",
    "roadmap": [
        { "title": "Fundamental Concepts", "steps": [
            { "title": "Statistics", "topics": ["Mean", "Variance"] },
            { "title": "Python", "topics": ["Pandas"] }
        ] }
    ]
}"#;

fn seeded_source() -> Arc<dyn RoadmapSource> {
    let source = InMemoryRoadmapSource::new();
    let document: RoadmapDocument = serde_json::from_str(STORED).unwrap();
    source
        .insert(RoadmapId::parse(ID).unwrap(), document)
        .unwrap();
    let other: RoadmapDocument = serde_json::from_str(OTHER).unwrap();
    source
        .insert(RoadmapId::parse(OTHER_ID).unwrap(), other)
        .unwrap();
    Arc::new(source)
}

struct FixedGenerator;

#[async_trait::async_trait]
impl RoadmapGenerator for FixedGenerator {
    async fn generate(&self, _request: &GenerateRequest) -> Result<RoadmapId, SourceError> {
        Ok(RoadmapId::parse(ID).unwrap())
    }
}

async fn render_loaded(view: ViewKind, source: Arc<dyn RoadmapSource>) -> String {
    let mut harness = setup_view_harness(view, source);
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    harness.render()
}

#[component]
fn BasicsSection() -> Element {
    let section = Section::new(
        "Basics",
        vec![
            Step::new("S1", vec!["A".into(), "B".into()]),
            Step::new("S2", vec!["C".into()]),
        ],
    );
    rsx! { RoadmapSection { section, section_index: 0 } }
}

#[test]
fn section_smoke_renders_progress_and_locks() {
    let mut dom = VirtualDom::new(BasicsSection);
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Basics"), "missing title in {html}");
    assert!(html.contains("0%"), "missing percentage in {html}");
    assert!(html.contains("Basic level content"), "missing tier in {html}");
    assert!(html.contains("Complete previous step"), "missing lock hint in {html}");
    assert!(html.contains("topic-not-started"), "missing status class in {html}");
    assert!(
        html.contains("topic topic-not-started locked"),
        "locked topics should be marked in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_generate_form() {
    let mut harness =
        setup_generating_harness(ViewKind::Home, empty_source(), Arc::new(FixedGenerator));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generate your learning roadmap"), "missing heading in {html}");
    assert!(html.contains("Field of study"), "missing field input in {html}");
    for level in ["Basic", "Intermediate", "Advanced"] {
        assert!(html.contains(&format!("value=\"{level}\"")), "missing {level} option in {html}");
    }
    assert!(html.contains("level-option selected"), "missing selected level in {html}");
    assert!(html.contains("Generate learning roadmap"), "missing button in {html}");
    assert!(!html.contains("needs an HTTP roadmap source"), "unexpected hint in {html}");
    assert!(html.contains("Open a roadmap"), "missing open form in {html}");
    assert!(html.contains("Roadmap id"), "missing id input in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_explains_missing_generator() {
    let mut harness = setup_view_harness(ViewKind::Home, empty_source());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Generating roadmaps needs an HTTP roadmap source."),
        "missing hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_follows_id_changes() {
    let view = ViewKind::SwitchRoadmap {
        from: ID.into(),
        to: OTHER_ID.into(),
    };
    let mut harness = setup_view_harness(view, seeded_source());
    harness.rebuild();
    for _ in 0..8 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Cloud Computing"), "expected the new roadmap in {html}");
    assert!(!html.contains("Data Science"), "stale roadmap still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_sections() {
    let html = render_loaded(ViewKind::Roadmap(ID.into()), seeded_source()).await;
    assert!(html.contains("Data Science"), "missing field in {html}");
    assert!(html.contains("1 section · 3 topics"), "missing summary in {html}");
    assert!(html.contains("Fundamental Concepts"), "missing section in {html}");
    assert!(html.contains("Pandas"), "missing topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_not_found() {
    let html = render_loaded(ViewKind::Roadmap(ID.into()), empty_source()).await;
    assert!(html.contains("Roadmap not found."), "missing not found in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");
}

struct FailingSource;

#[async_trait::async_trait]
impl RoadmapSource for FailingSource {
    async fn fetch(&self, _id: &RoadmapId) -> Result<RoadmapDocument, SourceError> {
        Err(SourceError::Unavailable("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_error_state() {
    let html = render_loaded(ViewKind::Roadmap(ID.into()), Arc::new(FailingSource)).await;
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

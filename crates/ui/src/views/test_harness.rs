use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{InMemoryRoadmapSource, RoadmapGenerator, RoadmapService, RoadmapSource};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, RoadmapView};

#[derive(Clone)]
struct TestApp {
    roadmaps: Arc<RoadmapService>,
}

impl UiApp for TestApp {
    fn roadmaps(&self) -> Arc<RoadmapService> {
        Arc::clone(&self.roadmaps)
    }

    fn initial_roadmap_id(&self) -> Option<String> {
        None
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Roadmap(String),
    /// Mounts a roadmap view on `from`, then swaps its id prop to `to`.
    SwitchRoadmap { from: String, to: String },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Roadmap(id) => rsx! { RoadmapView { id } },
        ViewKind::SwitchRoadmap { from, to } => rsx! { SwitchingRoadmap { from, to } },
    }
}

#[component]
fn SwitchingRoadmap(from: String, to: String) -> Element {
    let mut id = use_signal(|| from.clone());
    let mut switched = use_signal(|| false);
    use_effect(move || {
        if !switched() {
            switched.set(true);
            id.set(to.clone());
        }
    });
    rsx! { RoadmapView { id: id() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, source: Arc<dyn RoadmapSource>) -> ViewHarness {
    harness_for(view, RoadmapService::new(source))
}

pub fn setup_generating_harness(
    view: ViewKind,
    source: Arc<dyn RoadmapSource>,
    generator: Arc<dyn RoadmapGenerator>,
) -> ViewHarness {
    harness_for(view, RoadmapService::new(source).with_generator(generator))
}

fn harness_for(view: ViewKind, roadmaps: RoadmapService) -> ViewHarness {
    let app = Arc::new(TestApp {
        roadmaps: Arc::new(roadmaps),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

pub fn empty_source() -> Arc<dyn RoadmapSource> {
    Arc::new(InMemoryRoadmapSource::new())
}

use std::sync::{Arc, Mutex};

use services::RoadmapService;

pub trait UiApp: Send + Sync {
    fn roadmaps(&self) -> Arc<RoadmapService>;

    /// Roadmap to open right after launch, if one was requested.
    fn initial_roadmap_id(&self) -> Option<String>;
}

#[derive(Clone)]
pub struct AppContext {
    roadmaps: Arc<RoadmapService>,
    initial_roadmap_id: Arc<Mutex<Option<String>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            roadmaps: app.roadmaps(),
            initial_roadmap_id: Arc::new(Mutex::new(app.initial_roadmap_id())),
        }
    }

    #[must_use]
    pub fn roadmaps(&self) -> Arc<RoadmapService> {
        Arc::clone(&self.roadmaps)
    }

    /// One-shot: the first caller gets the launch roadmap id, later callers get `None`.
    #[must_use]
    pub fn take_initial_roadmap_id(&self) -> Option<String> {
        self.initial_roadmap_id
            .lock()
            .ok()
            .and_then(|mut guard| guard.take())
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

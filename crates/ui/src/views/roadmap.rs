use dioxus::prelude::*;
use roadmap_core::model::Section;

use crate::context::AppContext;
use crate::views::{RoadmapSection, ViewError, ViewState, view_state_from_resource};
use crate::vm::{RoadmapHeaderVm, map_roadmap_header};

#[derive(Clone, Debug, PartialEq)]
struct RoadmapData {
    key: String,
    header: RoadmapHeaderVm,
    sections: Vec<Section>,
}

#[component]
pub fn RoadmapView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let roadmaps = ctx.roadmaps();

    // Re-runs whenever the route hands this view a different id.
    let mut resource = use_resource(use_reactive((&id,), move |(id,)| {
        let roadmaps = roadmaps.clone();
        async move {
            let roadmap = roadmaps.load(&id).await.map_err(|err| {
                tracing::warn!(%id, error = %err, "failed to load roadmap");
                ViewError::from_service(&err)
            })?;
            Ok::<_, ViewError>(RoadmapData {
                key: roadmap.id().map_or(id, ToString::to_string),
                header: map_roadmap_header(&roadmap),
                sections: roadmap.sections().to_vec(),
            })
        }
    }));

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page roadmap",
            match state {
                ViewState::Loading => rsx! {
                    p { "Loading roadmap..." }
                },
                ViewState::Ready(data) => rsx! {
                    RoadmapHeader { header: data.header.clone() }
                    for (index, section) in data.sections.into_iter().enumerate() {
                        RoadmapSection {
                            key: "{data.key}-{index}",
                            section,
                            section_index: index,
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    if err == ViewError::Unknown {
                        button {
                            class: "button button-secondary",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn RoadmapHeader(header: RoadmapHeaderVm) -> Element {
    rsx! {
        header { class: "roadmap-header",
            h1 { "{header.field}" }
            p { class: "roadmap-level", "{header.level_label}" }
            p { class: "roadmap-summary", "{header.summary}" }
            if let Some(created) = header.created_label {
                p { class: "roadmap-created", "{created}" }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use roadmap_core::model::Level;
use services::RoadmapService;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{generation_error_message, map_level_options};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let roadmaps = ctx.roadmaps();
    let can_generate = roadmaps.can_generate();
    let navigator = use_navigator();

    let mut field = use_signal(String::new);
    let mut level = use_signal(|| Level::Basic);
    let mut generating = use_signal(|| false);
    let mut generate_error = use_signal(|| None::<String>);

    let mut roadmap_id = use_signal(String::new);
    let mut invalid = use_signal(|| false);

    use_effect(move || {
        if let Some(id) = ctx.take_initial_roadmap_id() {
            navigator.push(Route::Roadmap { id });
        }
    });

    let generate = move |_: MouseEvent| {
        let roadmaps = roadmaps.clone();
        let requested = field();
        let chosen = level();
        generating.set(true);
        generate_error.set(None);
        spawn(async move {
            match roadmaps.generate(&requested, chosen).await {
                Ok(id) => {
                    navigator.push(Route::Roadmap { id: id.to_string() });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "roadmap generation failed");
                    generate_error.set(Some(generation_error_message(&err)));
                    generating.set(false);
                }
            }
        });
    };

    let open = move |_: MouseEvent| {
        let raw = roadmap_id();
        match RoadmapService::parse_id(&raw) {
            Ok(id) => {
                invalid.set(false);
                navigator.push(Route::Roadmap { id: id.to_string() });
            }
            Err(_) => invalid.set(true),
        }
    };

    rsx! {
        div { class: "page home",
            h2 { "Generate your learning roadmap" }
            div { class: "generate-form",
                label { class: "form-label", r#for: "field-of-study", "Field of study" }
                input {
                    id: "field-of-study",
                    class: "input",
                    r#type: "text",
                    placeholder: "e.g. Machine Learning, Web Development, Data Science",
                    value: "{field}",
                    disabled: generating(),
                    oninput: move |evt| field.set(evt.value()),
                }
                p { class: "form-label", "Learning level" }
                div { class: "level-options",
                    for option in map_level_options(level()) {
                        label {
                            key: "{option.label}",
                            class: if option.selected { "level-option selected" } else { "level-option" },
                            input {
                                r#type: "radio",
                                name: "level",
                                value: "{option.label}",
                                checked: option.selected,
                                disabled: generating(),
                                onchange: move |_| level.set(option.level),
                            }
                            span { class: "level-name {option.class}", "{option.label}" }
                            span { class: "level-hint", "{option.hint}" }
                        }
                    }
                }
                button {
                    class: "button button-primary",
                    r#type: "button",
                    disabled: !can_generate || generating() || field().trim().is_empty(),
                    onclick: generate,
                    if generating() { "Creating your roadmap..." } else { "Generate learning roadmap" }
                }
                if !can_generate {
                    p { class: "form-hint", "Generating roadmaps needs an HTTP roadmap source." }
                }
                if let Some(message) = generate_error() {
                    p { class: "form-error", "{message}" }
                }
            }

            h3 { "Open a roadmap" }
            p { "Paste the id of a generated roadmap to track your progress through it." }
            div { class: "open-form",
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Roadmap id",
                    value: "{roadmap_id}",
                    oninput: move |evt| roadmap_id.set(evt.value()),
                }
                button {
                    class: "button button-secondary",
                    r#type: "button",
                    disabled: roadmap_id().trim().is_empty(),
                    onclick: open,
                    "Open"
                }
            }
            if invalid() {
                p { class: "form-error", "That does not look like a roadmap id." }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const STYLE: Asset = asset!("/assets/style.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Learning Roadmaps" }
        document::Stylesheet { href: STYLE }

        main { class: "app-root",
            ErrorBoundary { handle_error: render_crash, Router::<Route> {} }
        }
    }
}

fn render_crash(errors: ErrorContext) -> Element {
    tracing::error!(?errors, "viewer crashed");
    rsx! {
        section { class: "fatal",
            h1 { "The roadmap viewer stopped working" }
            p { "Reopen the roadmap to start again. Progress on this page is not saved." }
            pre { "{errors:?}" }
        }
    }
}

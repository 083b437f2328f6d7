use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, RoadmapView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/roadmap/:id", RoadmapView)] Roadmap { id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "nav-bar",
                Link { class: "brand", to: Route::Home {}, "Learning Roadmaps" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

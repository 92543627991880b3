use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{FormatsView, ReviewSlots, ReviewView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ReviewView)] Review {},
        #[route("/formats", FormatsView)] Formats {},
}

#[component]
fn Layout() -> Element {
    // Selections and results outlive page switches.
    use_context_provider(ReviewSlots::new);

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        nav { class: "sidebar",
            h1 { "RAG Review" }
            ul {
                li { Link { to: Route::Review {}, "Review" } }
                li { Link { to: Route::Formats {}, "File formats" } }
            }
            p { class: "sidebar-backend", "Backend: {ctx.backend_label()}" }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "RAG Review" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    ReviewCrashed { report: format!("{errors:?}") }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shown when a view panics or returns an error. Selections and results are
/// lost; the backend may still be processing the last request.
#[component]
fn ReviewCrashed(report: String) -> Element {
    let ctx = try_consume_context::<AppContext>();
    let backend = ctx
        .as_ref()
        .map_or("the configured backend", |ctx| ctx.backend_label())
        .to_string();

    rsx! {
        div { class: "fatal", role: "alert",
            h1 { "RAG Review stopped responding" }
            p {
                "The review page hit an unexpected error. Restart the app and re-select your files. "
                "If a request was in flight, check {backend} before re-running it."
            }
            details {
                summary { "Error details" }
                pre { "{report}" }
            }
        }
    }
}

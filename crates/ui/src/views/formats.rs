use dioxus::prelude::*;
use review_core::model::{ExpectedAnswerSet, QuestionSet};

#[component]
pub fn FormatsView() -> Element {
    let questions = QuestionSet::example_json();
    let expected = ExpectedAnswerSet::example_json();

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "File formats" }
            }
            section { class: "panel",
                h3 { "Questions file" }
                p { "A JSON object with a " code { "questions" } " list. "
                    code { "expected_answer" } " is optional." }
                pre { class: "format-example", code { "{questions}" } }
            }
            section { class: "panel",
                h3 { "Expected answers file" }
                p { "A JSON object with an " code { "answers" } " list; every entry needs an expected answer." }
                pre { class: "format-example", code { "{expected}" } }
            }
            p { class: "panel-hint",
                "Files are sent as-is. The backend decides whether a file is malformed."
            }
        }
    }
}

use dioxus::prelude::*;
use review_core::model::{FileSlot, RagRequest, ScoringRequest};

use crate::context::AppContext;
use crate::views::ask::AskPanel;
use crate::views::components::{
    AnswerList, FailureBanner, FilePicker, MetricsPanel, ProgressBar, ScoredAnswerList, TallyBar,
};
use crate::views::workflow::{ReviewSlots, launch_workflow};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FailureNotice, map_answer_cards, map_metrics, map_scored_cards, map_tally};

#[component]
pub fn ReviewView() -> Element {
    let slots = use_context::<ReviewSlots>();
    let selection = slots.selection;
    let pickers = FileSlot::ALL.into_iter().map(move |slot| {
        rsx! {
            FilePicker { key: "{slot:?}", slot, selection }
        }
    });

    rsx! {
        div { class: "page",
            header { class: "view-header",
                div {
                    h2 { class: "view-title", "Document Q&A review" }
                    p { class: "view-subtitle",
                        "Generate answers from a PDF, score them against expected answers, or ask single questions."
                    }
                }
                HealthBadge {}
            }
            section { class: "panel upload-panel",
                h3 { "Files" }
                {pickers}
            }
            div { class: "workflows",
                RagPanel {}
                ScoringPanel {}
            }
            AskPanel {}
        }
    }
}

#[component]
fn HealthBadge() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.review_service();

    let resource = use_resource(move || {
        let service = service.clone();
        async move {
            service
                .health()
                .await
                .map_err(|_| ViewError::BackendUnavailable)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        match state {
            ViewState::Idle | ViewState::Loading => rsx! {
                span { class: "health health-pending", "Checking backend..." }
            },
            ViewState::Ready(status) => rsx! {
                if status.is_healthy() {
                    span { class: "health health-up", "Backend online" }
                } else {
                    span { class: "health health-degraded", "Backend {status.status}" }
                }
            },
            ViewState::Error(err) => rsx! {
                span { class: "health health-down", "{err.message()}" }
            },
        }
    }
}

#[component]
fn RagPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let slots = use_context::<ReviewSlots>();
    let selection = slots.selection;
    let rag = slots.rag;

    let ready = selection.read().rag_request().is_some();
    let vm = rag.read();
    let busy = vm.is_busy();
    let progress = vm.progress();
    let notice = vm.failure().map(|notice| notice.message(vm.kind()));
    let cards = map_answer_cards(&vm.results().answers);
    let total = vm.results().total_questions;
    drop(vm);

    let on_generate = move |_: MouseEvent| {
        let service = ctx.review_service();
        let request = selection.peek().rag_request();
        launch_workflow(rag, request, move |request: RagRequest| async move {
            service
                .generate_answers(&request)
                .await
                .map_err(|err| FailureNotice::from_error(&err))
        });
    };

    rsx! {
        section { class: "panel workflow-panel",
            h3 { "Generate answers" }
            p { class: "panel-hint", "Needs a PDF document and a questions file." }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !ready || busy,
                onclick: on_generate,
                if busy { "Processing..." } else { "Generate Answers" }
            }
            if busy || progress > 0 {
                ProgressBar { value: progress }
            }
            {notice.map(|message| rsx! { FailureBanner { message } })}
            {total.map(|total| rsx! {
                p { class: "panel-summary", "{total} questions answered" }
            })}
            AnswerList { cards }
        }
    }
}

#[component]
fn ScoringPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let slots = use_context::<ReviewSlots>();
    let selection = slots.selection;
    let scoring = slots.scoring;

    let ready = selection.read().scoring_request().is_some();
    let vm = scoring.read();
    let busy = vm.is_busy();
    let progress = vm.progress();
    let notice = vm.failure().map(|notice| notice.message(vm.kind()));
    let answers = &vm.results().scored_answers;
    let cards = map_scored_cards(answers);
    let tally = map_tally(answers);
    let has_results = !answers.is_empty();
    let metrics = vm.results().metrics.as_ref().map(map_metrics);
    drop(vm);

    let on_score = move |_: MouseEvent| {
        let service = ctx.review_service();
        let request = selection.peek().scoring_request();
        launch_workflow(scoring, request, move |request: ScoringRequest| async move {
            service
                .score_answers(&request)
                .await
                .map_err(|err| FailureNotice::from_error(&err))
        });
    };

    rsx! {
        section { class: "panel workflow-panel",
            h3 { "Score answers" }
            p { class: "panel-hint", "Needs a questions file and an expected answers file." }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !ready || busy,
                onclick: on_score,
                if busy { "Scoring..." } else { "Score Answers" }
            }
            if busy || progress > 0 {
                ProgressBar { value: progress }
            }
            {notice.map(|message| rsx! { FailureBanner { message } })}
            if has_results {
                TallyBar { items: tally }
            }
            {metrics.map(|metrics| rsx! { MetricsPanel { metrics } })}
            ScoredAnswerList { cards }
        }
    }
}

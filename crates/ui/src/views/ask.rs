use dioxus::prelude::*;
use review_core::model::{AskRequest, FileSlot, SelectedFile};

use crate::context::AppContext;
use crate::views::components::{FailureBanner, ProgressBar};
use crate::views::workflow::{ReviewSlots, launch_workflow};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AskAnswerVm, FailureNotice, map_ask_answer, map_document_info};

/// Load the selected PDF into the backend, then ask it one question at a time.
#[component]
pub fn AskPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let slots = use_context::<ReviewSlots>();
    let selection = slots.selection;
    let mut question = slots.question;
    let document = slots.document;
    let ask = slots.ask;

    let has_pdf = selection.read().get(FileSlot::Pdf).is_some();
    let doc = document.read();
    let loading = doc.is_busy();
    let load_progress = doc.progress();
    let load_notice = doc.failure().map(|notice| notice.message(doc.kind()));
    let load_message = doc
        .results()
        .as_ref()
        .and_then(|upload| upload.message.clone());
    drop(doc);

    let vm = ask.read();
    let asking = vm.is_busy();
    let ask_progress = vm.progress();
    let ask_notice = vm.failure().map(|notice| notice.message(vm.kind()));
    let answer = vm.results().as_ref().map(map_ask_answer);
    drop(vm);
    let has_question = !question.read().trim().is_empty();

    let load_ctx = ctx.clone();
    let on_load = move |_: MouseEvent| {
        let service = load_ctx.review_service();
        let pdf = selection.peek().get(FileSlot::Pdf).cloned();
        launch_workflow(document, pdf, move |pdf: SelectedFile| async move {
            service
                .load_document(&pdf)
                .await
                .map(Some)
                .map_err(|err| FailureNotice::from_error(&err))
        });
    };

    let on_ask = move |_: MouseEvent| {
        let service = ctx.review_service();
        let request = AskRequest::new(&question.peek());
        launch_workflow(ask, request, move |request: AskRequest| async move {
            service
                .ask_question(&request)
                .await
                .map(Some)
                .map_err(|err| FailureNotice::from_error(&err))
        });
    };

    rsx! {
        section { class: "panel ask-panel",
            h3 { "Ask the document" }
            p { class: "panel-hint",
                "Load the selected PDF once, then ask single questions against it."
            }
            div { class: "ask-document",
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: !has_pdf || loading,
                    onclick: on_load,
                    if loading { "Loading..." } else { "Load Document" }
                }
                DocumentInfo {}
            }
            if loading || load_progress > 0 {
                ProgressBar { value: load_progress }
            }
            {load_notice.map(|message| rsx! { FailureBanner { message } })}
            {load_message.map(|message| rsx! {
                p { class: "panel-summary", "{message}" }
            })}
            div { class: "ask-row",
                input {
                    class: "question-input",
                    r#type: "text",
                    placeholder: "What does the document say about...",
                    value: "{question}",
                    oninput: move |evt: FormEvent| question.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !has_question || asking,
                    onclick: on_ask,
                    if asking { "Asking..." } else { "Ask" }
                }
            }
            if asking || ask_progress > 0 {
                ProgressBar { value: ask_progress }
            }
            {ask_notice.map(|message| rsx! { FailureBanner { message } })}
            {answer.map(|answer| rsx! { AskAnswer { answer } })}
        }
    }
}

#[component]
fn AskAnswer(answer: AskAnswerVm) -> Element {
    rsx! {
        article { class: "answer-card ask-answer",
            h4 { class: "answer-question", "{answer.question}" }
            p { class: "answer-text", "{answer.answer}" }
            div { class: "answer-badges",
                {answer.confidence_label.as_ref().map(|label| rsx! {
                    span { class: "badge badge-confidence", "Confidence {label}" }
                })}
                {answer.sources_label.as_ref().map(|label| rsx! {
                    span { class: "badge badge-sources", "{label}" }
                })}
            }
            if !answer.sources.is_empty() {
                details { class: "ask-sources",
                    summary { "Sources" }
                    ol {
                        for (index, source) in answer.sources.iter().enumerate() {
                            li { key: "{index}", "{source}" }
                        }
                    }
                }
            }
        }
    }
}

/// What the backend currently has loaded, refetched after each upload.
#[component]
fn DocumentInfo() -> Element {
    let ctx = use_context::<AppContext>();
    let document = use_context::<ReviewSlots>().document;
    let service = ctx.review_service();

    let uploaded = use_memo(move || {
        document
            .read()
            .results()
            .as_ref()
            .and_then(|upload| upload.filename.clone())
    });

    let mut resource = use_resource(move || {
        let service = service.clone();
        // Subscribe so a new upload refetches.
        let _ = uploaded();
        async move {
            service
                .agent_info()
                .await
                .map(|info| map_document_info(&info))
                .map_err(|_| ViewError::BackendUnavailable)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "doc-info",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    span { class: "doc-status doc-status-pending", "Checking document..." }
                },
                ViewState::Ready(info) => rsx! {
                    span {
                        class: if info.loaded { "doc-status doc-status-loaded" } else { "doc-status" },
                        "{info.status}"
                    }
                    if !info.rows.is_empty() {
                        dl { class: "doc-details",
                            for (label, value) in info.rows.iter() {
                                div { key: "{label}", class: "doc-detail",
                                    dt { "{label}" }
                                    dd { "{value}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    span { class: "doc-status doc-status-down", "{err.message()}" }
                },
            }
            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| resource.restart(),
                "Refresh"
            }
        }
    }
}

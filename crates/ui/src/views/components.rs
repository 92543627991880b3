use dioxus::prelude::*;
use review_core::model::{FileSlot, SelectedFile, UploadSelection};
use tracing::debug;

use crate::vm::{AnswerCardVm, MetricsVm, ScoredAnswerCardVm, StatusIcon, TallyItemVm};

// ─── Upload ─────────────────────────────────────────────────────────────────

#[component]
pub fn FilePicker(slot: FileSlot, selection: Signal<UploadSelection>) -> Element {
    let mut selection = selection;
    let chosen = selection
        .read()
        .get(slot)
        .map(|file| file.name().to_string());

    rsx! {
        div { class: "file-picker",
            label { class: "file-picker-label",
                span { "{slot.label()}" }
                input {
                    r#type: "file",
                    accept: slot.accept(),
                    "data-slot": slot.form_field(),
                    onchange: move |evt: FormEvent| {
                        let Some(file) = evt.files().into_iter().next() else {
                            return;
                        };
                        // The picker's own type wins over the extension.
                        let candidate =
                            SelectedFile::from_picker(file.path(), file.content_type());
                        if let Err(err) = selection.write().select(slot, candidate) {
                            debug!(error = %err, "file selection rejected");
                        }
                    },
                }
            }
            match chosen {
                Some(name) => rsx! {
                    span { class: "file-picker-name", "{name}" }
                },
                None => rsx! {
                    span { class: "file-picker-name file-picker-empty", "No file selected" }
                },
            }
        }
    }
}

// ─── Run feedback ───────────────────────────────────────────────────────────

#[component]
pub fn ProgressBar(value: u8) -> Element {
    rsx! {
        div { class: "progress", "data-progress": "{value}",
            div { class: "progress-fill", style: "width: {value}%" }
        }
    }
}

#[component]
pub fn FailureBanner(message: String) -> Element {
    rsx! {
        div { class: "notice notice-error", role: "alert", "{message}" }
    }
}

// ─── Generated answers ──────────────────────────────────────────────────────

#[component]
pub fn AnswerList(cards: Vec<AnswerCardVm>) -> Element {
    rsx! {
        if cards.is_empty() {
            p { class: "empty", "No answers yet." }
        } else {
            ul { class: "answer-list",
                for card in cards {
                    AnswerCard { key: "{card.key}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn AnswerCard(card: AnswerCardVm) -> Element {
    rsx! {
        li { class: "answer-card",
            h4 { class: "answer-question", "{card.question}" }
            p { class: "answer-text", "{card.answer}" }
            div { class: "answer-badges",
                {card.confidence_label.as_ref().map(|label| rsx! {
                    span { class: "badge badge-confidence", "Confidence {label}" }
                })}
                {card.sources_label.as_ref().map(|label| rsx! {
                    span { class: "badge badge-sources", "{label}" }
                })}
            }
        }
    }
}

// ─── Scored answers ─────────────────────────────────────────────────────────

#[component]
pub fn ScoredAnswerList(cards: Vec<ScoredAnswerCardVm>) -> Element {
    rsx! {
        if cards.is_empty() {
            p { class: "empty", "No scores yet." }
        } else {
            ul { class: "scored-list",
                for card in cards {
                    ScoredAnswerCard { key: "{card.key}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
fn ScoredAnswerCard(card: ScoredAnswerCardVm) -> Element {
    let class = format!("scored-card {}", card.tone.css_class());
    rsx! {
        li { class: "{class}",
            div { class: "scored-card-header",
                StatusGlyph { icon: card.icon }
                span { class: "status-label", "{card.status_label}" }
                span { class: "score", "{card.score_label}" }
            }
            h4 { class: "answer-question", "{card.question}" }
            dl { class: "scored-card-body",
                dt { "Expected" }
                dd { "{card.expected_answer}" }
                dt { "Answered" }
                dd { "{card.rag_answer}" }
            }
        }
    }
}

#[component]
fn StatusGlyph(icon: StatusIcon) -> Element {
    rsx! {
        span { class: "status-icon", "data-icon": icon.name(), "{icon.glyph()}" }
    }
}

#[component]
pub fn TallyBar(items: Vec<TallyItemVm>) -> Element {
    rsx! {
        div { class: "tally",
            for item in items {
                span {
                    key: "{item.label}",
                    class: "tally-item {item.tone.css_class()}",
                    "{item.label}: {item.count}"
                }
            }
        }
    }
}

#[component]
pub fn MetricsPanel(metrics: MetricsVm) -> Element {
    rsx! {
        dl { class: "metrics",
            dt { "Questions" }
            dd { "{metrics.total_label}" }
            dt { "Average score" }
            dd { "{metrics.average_label}" }
            dt { "Pass rate" }
            dd { "{metrics.pass_rate_label}" }
        }
    }
}

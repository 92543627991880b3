//! Plain-text renderings of the result lists for terminal output.

use std::fmt::Write as _;

use crate::vm::answer_vm::AnswerCardVm;
use crate::vm::document_vm::{AskAnswerVm, DocumentInfoVm};
use crate::vm::scored_vm::{MetricsVm, ScoredAnswerCardVm, TallyItemVm};

#[must_use]
pub fn answers_report(cards: &[AnswerCardVm]) -> String {
    if cards.is_empty() {
        return "No answers returned.\n".to_string();
    }
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, card.question);
        let _ = writeln!(out, "   {}", card.answer);
        let mut details = Vec::new();
        if let Some(confidence) = &card.confidence_label {
            details.push(format!("confidence {confidence}"));
        }
        if let Some(sources) = &card.sources_label {
            details.push(sources.clone());
        }
        if !details.is_empty() {
            let _ = writeln!(out, "   [{}]", details.join(", "));
        }
    }
    out
}

#[must_use]
pub fn scoring_report(
    cards: &[ScoredAnswerCardVm],
    tally: &[TallyItemVm],
    metrics: Option<&MetricsVm>,
) -> String {
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. [{} {}] {} ({})",
            index + 1,
            card.icon.glyph(),
            card.status_label,
            card.question,
            card.score_label
        );
        let _ = writeln!(out, "   expected: {}", card.expected_answer);
        let _ = writeln!(out, "   answered: {}", card.rag_answer);
    }
    let counts: Vec<String> = tally
        .iter()
        .map(|item| format!("{}: {}", item.label, item.count))
        .collect();
    let _ = writeln!(out, "{}", counts.join("  "));
    if let Some(metrics) = metrics {
        let _ = writeln!(
            out,
            "questions: {}  average: {}  pass rate: {}",
            metrics.total_label, metrics.average_label, metrics.pass_rate_label
        );
    }
    out
}

#[must_use]
pub fn ask_report(answer: &AskAnswerVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Q: {}", answer.question);
    let _ = writeln!(out, "A: {}", answer.answer);
    let details: Vec<&str> = [&answer.confidence_label, &answer.sources_label]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();
    if !details.is_empty() {
        let _ = writeln!(out, "   [{}]", details.join(", "));
    }
    for source in &answer.sources {
        let _ = writeln!(out, "   > {source}");
    }
    out
}

#[must_use]
pub fn document_report(info: &DocumentInfoVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", info.status);
    for (label, value) in &info.rows {
        let _ = writeln!(out, "  {label}: {value}");
    }
    out
}

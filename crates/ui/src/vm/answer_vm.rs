use review_core::model::Answer;

use crate::vm::percent_fmt::format_ratio_percent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerCardVm {
    pub key: String,
    pub question: String,
    pub answer: String,
    pub confidence_label: Option<String>,
    pub sources_label: Option<String>,
}

#[must_use]
pub fn map_answer_cards(answers: &[Answer]) -> Vec<AnswerCardVm> {
    answers
        .iter()
        .enumerate()
        .map(|(index, answer)| AnswerCardVm {
            key: answer
                .id
                .clone()
                .unwrap_or_else(|| format!("answer-{index}")),
            question: answer.question.clone(),
            answer: answer.answer.clone(),
            confidence_label: answer.confidence.map(format_ratio_percent),
            sources_label: answer.source_count.map(|count| match count {
                1 => "1 source".to_string(),
                n => format!("{n} sources"),
            }),
        })
        .collect()
}

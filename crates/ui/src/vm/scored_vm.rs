use review_core::model::{ScoreMetrics, ScoreStatus, ScoredAnswer, StatusTally};

use crate::vm::percent_fmt::{format_percent, format_ratio_percent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
}

impl StatusTone {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            StatusTone::Success => "tone-success",
            StatusTone::Warning => "tone-warning",
            StatusTone::Danger => "tone-danger",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Warn,
}

impl StatusIcon {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StatusIcon::Check => "check",
            StatusIcon::Warn => "warn",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            StatusIcon::Check => "✓",
            StatusIcon::Warn => "!",
        }
    }
}

/// Tone and icon depend on `status` alone, never on the numeric score.
#[must_use]
pub const fn status_presentation(status: ScoreStatus) -> (StatusTone, StatusIcon) {
    match status {
        ScoreStatus::Excellent => (StatusTone::Success, StatusIcon::Check),
        ScoreStatus::Good => (StatusTone::Warning, StatusIcon::Warn),
        ScoreStatus::Poor => (StatusTone::Danger, StatusIcon::Warn),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredAnswerCardVm {
    pub key: String,
    pub question: String,
    pub expected_answer: String,
    pub rag_answer: String,
    pub status_label: &'static str,
    pub tone: StatusTone,
    pub icon: StatusIcon,
    pub score_label: String,
}

#[must_use]
pub fn map_scored_cards(answers: &[ScoredAnswer]) -> Vec<ScoredAnswerCardVm> {
    answers
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            let (tone, icon) = status_presentation(answer.status);
            ScoredAnswerCardVm {
                key: answer
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("scored-{index}")),
                question: answer.question.clone(),
                expected_answer: answer.expected_answer.clone(),
                rag_answer: answer.rag_answer.clone(),
                status_label: answer.status.label(),
                tone,
                icon,
                score_label: format_ratio_percent(answer.score),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TallyItemVm {
    pub label: &'static str,
    pub count: u32,
    pub tone: StatusTone,
}

#[must_use]
pub fn map_tally(answers: &[ScoredAnswer]) -> Vec<TallyItemVm> {
    let tally = StatusTally::from_answers(answers);
    ScoreStatus::ALL
        .into_iter()
        .map(|status| TallyItemVm {
            label: status.label(),
            count: tally.count(status),
            tone: status_presentation(status).0,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsVm {
    pub total_label: String,
    pub average_label: String,
    pub pass_rate_label: String,
}

#[must_use]
pub fn map_metrics(metrics: &ScoreMetrics) -> MetricsVm {
    MetricsVm {
        total_label: metrics.total_questions.to_string(),
        average_label: format_ratio_percent(metrics.average_score),
        pass_rate_label: format_percent(metrics.pass_rate),
    }
}

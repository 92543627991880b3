use std::fmt;

use serde::{Deserialize, Serialize};

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Three-tier qualitative bucket assigned by the backend to each scored answer.
///
/// The client trusts this value as sent and never re-derives it from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    Excellent,
    Good,
    Poor,
}

impl ScoreStatus {
    pub const ALL: [ScoreStatus; 3] = [Self::Excellent, Self::Good, Self::Poor];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ScoreStatus::Excellent => "Excellent",
            ScoreStatus::Good => "Good",
            ScoreStatus::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

/// A backend answer compared against a human-provided expected answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub expected_answer: String,
    pub rag_answer: String,
    /// Similarity in `[0, 1]`.
    pub score: f64,
    pub status: ScoreStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Aggregate metrics the backend may attach to a scoring response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMetrics {
    pub total_questions: u32,
    pub average_score: f64,
    pub excellent_count: u32,
    pub good_count: u32,
    pub poor_count: u32,
    /// Already a percentage (0-100), not a ratio.
    pub pass_rate: f64,
}

/// Successful body of `/score-answers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub scored_answers: Vec<ScoredAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ScoreMetrics>,
}

//
// ─── TALLY ─────────────────────────────────────────────────────────────────────
//

/// Count of scored answers per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    pub excellent: u32,
    pub good: u32,
    pub poor: u32,
}

impl StatusTally {
    #[must_use]
    pub fn from_answers(answers: &[ScoredAnswer]) -> Self {
        answers
            .iter()
            .fold(Self::default(), |tally, answer| tally.with(answer.status))
    }

    #[must_use]
    pub fn with(mut self, status: ScoreStatus) -> Self {
        match status {
            ScoreStatus::Excellent => self.excellent = self.excellent.saturating_add(1),
            ScoreStatus::Good => self.good = self.good.saturating_add(1),
            ScoreStatus::Poor => self.poor = self.poor.saturating_add(1),
        }
        self
    }

    #[must_use]
    pub fn count(&self, status: ScoreStatus) -> u32 {
        match status {
            ScoreStatus::Excellent => self.excellent,
            ScoreStatus::Good => self.good,
            ScoreStatus::Poor => self.poor,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.excellent
            .saturating_add(self.good)
            .saturating_add(self.poor)
    }
}

mod answer;
mod document;
mod health;
mod question;
mod scoring;
mod upload;

pub use answer::{Answer, RagResponse};
pub use document::{AgentInfo, AskRequest, AskResponse, DocumentUpload};
pub use health::HealthStatus;
pub use question::{ExpectedAnswer, ExpectedAnswerSet, Question, QuestionSet};
pub use scoring::{ScoreMetrics, ScoreResponse, ScoreStatus, ScoredAnswer, StatusTally};
pub use upload::{
    FileSlot, RagRequest, ScoringRequest, SelectedFile, SelectionError, UploadSelection,
};

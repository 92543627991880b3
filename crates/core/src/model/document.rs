//! Single-question asks and the state of the backend's loaded document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body of `POST /ask-question`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl AskRequest {
    /// `None` for blank input, which the backend would reject anyway.
    #[must_use]
    pub fn new(question: &str) -> Option<Self> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        Some(Self {
            question: question.to_owned(),
        })
    }
}

/// Successful body of `POST /ask-question`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_count: Option<u32>,
    /// Short excerpts of the passages the answer was drawn from.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Body of `GET /agent-info`, also embedded in the upload reply.
///
/// Only `status` is fixed; the rest describes the retrieval setup and is kept
/// as-is for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub status: String,
    #[serde(flatten)]
    pub details: BTreeMap<String, Value>,
}

impl AgentInfo {
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.status.eq_ignore_ascii_case("document loaded")
    }
}

/// Successful body of `POST /upload-pdf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentUpload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<AgentInfo>,
}

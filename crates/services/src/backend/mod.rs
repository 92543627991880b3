use async_trait::async_trait;
use review_core::model::{
    AgentInfo, AskRequest, AskResponse, DocumentUpload, HealthStatus, RagRequest, RagResponse,
    ScoreResponse, ScoringRequest, SelectedFile,
};

use crate::error::BackendError;

mod http;
#[cfg(any(test, feature = "test-support"))]
mod stub;

pub use http::HttpBackend;
#[cfg(any(test, feature = "test-support"))]
pub use stub::{Scripted, StubBackend};

pub const PROCESS_RAG_PATH: &str = "process-rag";
pub const SCORE_ANSWERS_PATH: &str = "score-answers";
pub const HEALTH_PATH: &str = "health";
pub const UPLOAD_PDF_PATH: &str = "upload-pdf";
pub const ASK_QUESTION_PATH: &str = "ask-question";
pub const AGENT_INFO_PATH: &str = "agent-info";

/// Contract for the external answer-generation and scoring backend.
#[async_trait]
pub trait ReviewBackend: Send + Sync {
    /// Human-readable location of the backend, for display.
    fn describe(&self) -> String;

    /// Upload a PDF and a questions file; receive generated answers.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::HttpStatus` for non-2xx responses, or a transport,
    /// decode, or file-read error.
    async fn process_rag(&self, request: &RagRequest) -> Result<RagResponse, BackendError>;

    /// Upload questions and expected answers; receive scored answers.
    ///
    /// # Errors
    ///
    /// Same as [`ReviewBackend::process_rag`].
    async fn score_answers(&self, request: &ScoringRequest)
    -> Result<ScoreResponse, BackendError>;

    /// Load a PDF as the backend's current document for single-question asks.
    ///
    /// # Errors
    ///
    /// Same as [`ReviewBackend::process_rag`].
    async fn upload_pdf(&self, pdf: &SelectedFile) -> Result<DocumentUpload, BackendError>;

    /// Ask one question against the currently loaded document.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::HttpStatus` for non-2xx responses, or a transport
    /// or decode error.
    async fn ask_question(&self, request: &AskRequest) -> Result<AskResponse, BackendError>;

    /// Describe the loaded document and retrieval setup.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` when the backend is unreachable.
    async fn agent_info(&self) -> Result<AgentInfo, BackendError>;

    /// Ask the backend's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` when the backend is unreachable or unhealthy.
    async fn health(&self) -> Result<HealthStatus, BackendError>;
}

use std::sync::Arc;

use review_core::model::{
    AgentInfo, AskRequest, AskResponse, DocumentUpload, HealthStatus, RagRequest, RagResponse,
    ScoreResponse, ScoringRequest, SelectedFile,
};
use tracing::{debug, info, warn};

use crate::backend::ReviewBackend;
use crate::error::BackendError;

/// Front door for every backend operation.
///
/// Failures are reported to the operator console here and handed back
/// unchanged; callers decide what the user sees.
#[derive(Clone)]
pub struct ReviewService {
    backend: Arc<dyn ReviewBackend>,
}

impl ReviewService {
    #[must_use]
    pub fn new(backend: Arc<dyn ReviewBackend>) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend_label(&self) -> String {
        self.backend.describe()
    }

    /// Generate answers for every question in the questions file.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the backend rejects the request or cannot be reached.
    pub async fn generate_answers(
        &self,
        request: &RagRequest,
    ) -> Result<RagResponse, BackendError> {
        info!(
            pdf = request.pdf.name(),
            questions = request.questions.name(),
            "submitting answer generation"
        );
        match self.backend.process_rag(request).await {
            Ok(response) => {
                info!(answers = response.answers.len(), "answer generation finished");
                Ok(response)
            }
            Err(err) => {
                warn!(error = %err, "answer generation failed");
                Err(err)
            }
        }
    }

    /// Score backend answers against the expected-answers file.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the backend rejects the request or cannot be reached.
    pub async fn score_answers(
        &self,
        request: &ScoringRequest,
    ) -> Result<ScoreResponse, BackendError> {
        info!(
            questions = request.questions.name(),
            expected_answers = request.expected_answers.name(),
            "submitting answer scoring"
        );
        match self.backend.score_answers(request).await {
            Ok(response) => {
                info!(
                    scored = response.scored_answers.len(),
                    "answer scoring finished"
                );
                Ok(response)
            }
            Err(err) => {
                warn!(error = %err, "answer scoring failed");
                Err(err)
            }
        }
    }

    /// Make `pdf` the document that single questions are asked against.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the backend rejects the upload or cannot be reached.
    pub async fn load_document(&self, pdf: &SelectedFile) -> Result<DocumentUpload, BackendError> {
        info!(pdf = pdf.name(), "loading document");
        self.backend
            .upload_pdf(pdf)
            .await
            .inspect(|_| info!(pdf = pdf.name(), "document loaded"))
            .inspect_err(|err| warn!(error = %err, "document load failed"))
    }

    /// # Errors
    ///
    /// Returns `BackendError` if the backend rejects the question or cannot be reached.
    pub async fn ask_question(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        info!(chars = request.question.len(), "asking question");
        self.backend
            .ask_question(request)
            .await
            .inspect_err(|err| warn!(error = %err, "question failed"))
    }

    /// # Errors
    ///
    /// Returns `BackendError` if the backend cannot be reached.
    pub async fn agent_info(&self) -> Result<AgentInfo, BackendError> {
        self.backend.agent_info().await.inspect_err(|err| {
            debug!(error = %err, "agent info request failed");
        })
    }

    /// # Errors
    ///
    /// Returns `BackendError` if the health check fails.
    pub async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.backend.health().await.inspect_err(|err| {
            debug!(error = %err, "backend health check failed");
        })
    }
}

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use review_core::model::{
    AgentInfo, AskRequest, AskResponse, DocumentUpload, FileSlot, HealthStatus, RagRequest,
    RagResponse, ScoreResponse, ScoringRequest, SelectedFile,
};
use serde::de::DeserializeOwned;

use super::{
    AGENT_INFO_PATH, ASK_QUESTION_PATH, HEALTH_PATH, PROCESS_RAG_PATH, ReviewBackend,
    SCORE_ANSWERS_PATH, UPLOAD_PDF_PATH,
};
use crate::config::BackendConfig;
use crate::error::BackendError;

/// `ReviewBackend` over HTTP multipart uploads.
///
/// Error bodies are never read: any non-2xx status becomes
/// `BackendError::HttpStatus`.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns `BackendError::Http` if the HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, BackendError> {
        fetch_json(self.client.post(self.config.endpoint(path)).multipart(form)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        fetch_json(self.client.get(self.config.endpoint(path))).await
    }
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, BackendError> {
    let response = request.send().await?;

    if !response.status().is_success() {
        return Err(BackendError::HttpStatus(response.status()));
    }

    Ok(response.json().await?)
}

async fn file_part(file: &SelectedFile) -> Result<Part, BackendError> {
    let bytes = tokio::fs::read(file.path())
        .await
        .map_err(|source| BackendError::Io {
            path: file.path().to_path_buf(),
            source,
        })?;
    Ok(Part::bytes(bytes)
        .file_name(file.name().to_string())
        .mime_str(file.content_type())?)
}

#[async_trait]
impl ReviewBackend for HttpBackend {
    fn describe(&self) -> String {
        self.config.base_url().to_string()
    }

    async fn process_rag(&self, request: &RagRequest) -> Result<RagResponse, BackendError> {
        let form = Form::new()
            .part(FileSlot::Pdf.form_field(), file_part(&request.pdf).await?)
            .part(
                FileSlot::Questions.form_field(),
                file_part(&request.questions).await?,
            );
        self.post_form(PROCESS_RAG_PATH, form).await
    }

    async fn score_answers(
        &self,
        request: &ScoringRequest,
    ) -> Result<ScoreResponse, BackendError> {
        let form = Form::new()
            .part(
                FileSlot::Questions.form_field(),
                file_part(&request.questions).await?,
            )
            .part(
                FileSlot::ExpectedAnswers.form_field(),
                file_part(&request.expected_answers).await?,
            );
        self.post_form(SCORE_ANSWERS_PATH, form).await
    }

    async fn upload_pdf(&self, pdf: &SelectedFile) -> Result<DocumentUpload, BackendError> {
        let form = Form::new().part(FileSlot::Pdf.form_field(), file_part(pdf).await?);
        self.post_form(UPLOAD_PDF_PATH, form).await
    }

    async fn ask_question(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        fetch_json(
            self.client
                .post(self.config.endpoint(ASK_QUESTION_PATH))
                .json(request),
        )
        .await
    }

    async fn agent_info(&self) -> Result<AgentInfo, BackendError> {
        self.get_json(AGENT_INFO_PATH).await
    }

    async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.get_json(HEALTH_PATH).await
    }
}

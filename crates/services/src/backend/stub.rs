use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use review_core::model::{
    AgentInfo, AskRequest, AskResponse, DocumentUpload, HealthStatus, RagRequest, RagResponse,
    ScoreResponse, ScoringRequest, SelectedFile,
};

use super::ReviewBackend;
use crate::error::BackendError;

/// Canned reply for one endpoint of `StubBackend`.
#[derive(Clone, Debug)]
pub enum Scripted<T> {
    Reply(T),
    Status(StatusCode),
    Unreachable,
}

impl<T: Clone> Scripted<T> {
    fn resolve(&self) -> Result<T, BackendError> {
        match self {
            Scripted::Reply(value) => Ok(value.clone()),
            Scripted::Status(status) => Err(BackendError::HttpStatus(*status)),
            Scripted::Unreachable => Err(BackendError::Unavailable("connection refused".into())),
        }
    }
}

/// In-memory backend for tests.
///
/// Replies are scripted per endpoint and repeated on every call; calls are
/// counted so tests can assert that no request was made.
#[derive(Clone)]
pub struct StubBackend {
    state: Arc<StubState>,
}

struct StubState {
    rag: Mutex<Scripted<RagResponse>>,
    scoring: Mutex<Scripted<ScoreResponse>>,
    upload: Mutex<Scripted<DocumentUpload>>,
    ask: Mutex<Scripted<AskResponse>>,
    agent_info: Mutex<Scripted<AgentInfo>>,
    health: Mutex<Scripted<HealthStatus>>,
    rag_calls: AtomicUsize,
    scoring_calls: AtomicUsize,
    upload_calls: AtomicUsize,
    ask_calls: AtomicUsize,
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StubBackend {
    /// Empty result sets, no document loaded, and a healthy backend.
    #[must_use]
    pub fn new() -> Self {
        let no_document = AgentInfo {
            status: "No document loaded".to_string(),
            ..AgentInfo::default()
        };
        Self {
            state: Arc::new(StubState {
                rag: Mutex::new(Scripted::Reply(RagResponse::default())),
                scoring: Mutex::new(Scripted::Reply(ScoreResponse::default())),
                upload: Mutex::new(Scripted::Reply(DocumentUpload::default())),
                ask: Mutex::new(Scripted::Reply(AskResponse::default())),
                agent_info: Mutex::new(Scripted::Reply(no_document)),
                health: Mutex::new(Scripted::Reply(HealthStatus {
                    status: "healthy".to_string(),
                    agent_status: Some("initialized".to_string()),
                })),
                rag_calls: AtomicUsize::new(0),
                scoring_calls: AtomicUsize::new(0),
                upload_calls: AtomicUsize::new(0),
                ask_calls: AtomicUsize::new(0),
            }),
        }
    }

    pub fn script_rag(&self, reply: Scripted<RagResponse>) {
        script(&self.state.rag, reply);
    }

    pub fn script_scoring(&self, reply: Scripted<ScoreResponse>) {
        script(&self.state.scoring, reply);
    }

    pub fn script_upload(&self, reply: Scripted<DocumentUpload>) {
        script(&self.state.upload, reply);
    }

    pub fn script_ask(&self, reply: Scripted<AskResponse>) {
        script(&self.state.ask, reply);
    }

    pub fn script_agent_info(&self, reply: Scripted<AgentInfo>) {
        script(&self.state.agent_info, reply);
    }

    pub fn script_health(&self, reply: Scripted<HealthStatus>) {
        script(&self.state.health, reply);
    }

    #[must_use]
    pub fn rag_calls(&self) -> usize {
        self.state.rag_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn scoring_calls(&self) -> usize {
        self.state.scoring_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn upload_calls(&self) -> usize {
        self.state.upload_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn ask_calls(&self) -> usize {
        self.state.ask_calls.load(Ordering::SeqCst)
    }
}

fn script<T>(slot: &Mutex<Scripted<T>>, reply: Scripted<T>) {
    if let Ok(mut guard) = slot.lock() {
        *guard = reply;
    }
}

fn resolve<T: Clone>(slot: &Mutex<Scripted<T>>) -> Result<T, BackendError> {
    let guard = slot
        .lock()
        .map_err(|e| BackendError::Unavailable(e.to_string()))?;
    guard.resolve()
}

#[async_trait]
impl ReviewBackend for StubBackend {
    fn describe(&self) -> String {
        "stub".to_string()
    }

    async fn process_rag(&self, _request: &RagRequest) -> Result<RagResponse, BackendError> {
        self.state.rag_calls.fetch_add(1, Ordering::SeqCst);
        resolve(&self.state.rag)
    }

    async fn score_answers(
        &self,
        _request: &ScoringRequest,
    ) -> Result<ScoreResponse, BackendError> {
        self.state.scoring_calls.fetch_add(1, Ordering::SeqCst);
        resolve(&self.state.scoring)
    }

    async fn upload_pdf(&self, _pdf: &SelectedFile) -> Result<DocumentUpload, BackendError> {
        self.state.upload_calls.fetch_add(1, Ordering::SeqCst);
        resolve(&self.state.upload)
    }

    async fn ask_question(&self, _request: &AskRequest) -> Result<AskResponse, BackendError> {
        self.state.ask_calls.fetch_add(1, Ordering::SeqCst);
        resolve(&self.state.ask)
    }

    async fn agent_info(&self) -> Result<AgentInfo, BackendError> {
        resolve(&self.state.agent_info)
    }

    async fn health(&self) -> Result<HealthStatus, BackendError> {
        resolve(&self.state.health)
    }
}

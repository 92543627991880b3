use std::future::Future;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use review_core::model::{AskResponse, DocumentUpload, RagResponse, ScoreResponse, UploadSelection};
use review_core::progress::PROGRESS_RESET_DELAY;
use tracing::debug;

use crate::vm::{FailureNotice, WorkflowKind, WorkflowVm};

/// Signals shared by the review page: the file selection, the question being
/// typed, and one slot per workflow.
#[derive(Clone, Copy, PartialEq)]
pub struct ReviewSlots {
    pub selection: Signal<UploadSelection>,
    pub question: Signal<String>,
    pub rag: Signal<WorkflowVm<RagResponse>>,
    pub scoring: Signal<WorkflowVm<ScoreResponse>>,
    pub document: Signal<WorkflowVm<Option<DocumentUpload>>>,
    pub ask: Signal<WorkflowVm<Option<AskResponse>>>,
}

impl ReviewSlots {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selection: Signal::new(UploadSelection::default()),
            question: Signal::new(String::new()),
            rag: Signal::new(WorkflowVm::new(WorkflowKind::Rag)),
            scoring: Signal::new(WorkflowVm::new(WorkflowKind::Scoring)),
            document: Signal::new(WorkflowVm::new(WorkflowKind::Document)),
            ask: Signal::new(WorkflowVm::new(WorkflowKind::Ask)),
        }
    }
}

impl Default for ReviewSlots {
    fn default() -> Self {
        Self::new()
    }
}

/// Start a run in `slot`, drive its progress ramp, and record the outcome.
///
/// Does nothing when `request` is `None` or the slot is already busy. The
/// ticker and the request run in the root scope, so leaving the page does not
/// strand the slot in its busy state.
pub fn launch_workflow<T, R, F, Fut>(mut slot: Signal<WorkflowVm<T>>, request: Option<R>, submit: F)
where
    T: 'static,
    R: 'static,
    F: FnOnce(R) -> Fut + 'static,
    Fut: Future<Output = Result<T, FailureNotice>> + 'static,
{
    let started = slot.write().start(request);
    let kind = slot.peek().kind();
    let Some((run, request)) = started else {
        debug!(workflow = kind.label(), "start ignored");
        return;
    };

    let interval = kind.ramp().interval();
    let ticker = spawn_forever(async move {
        loop {
            tokio::time::sleep(interval).await;
            slot.write().tick(run);
        }
    });

    spawn_forever(async move {
        let outcome = submit(request).await;
        ticker.cancel();
        slot.write().finish(run, outcome);
        tokio::time::sleep(PROGRESS_RESET_DELAY).await;
        slot.write().settle(run);
    });
}

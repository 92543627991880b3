use review_core::{Progress, ProgressRamp};
use services::BackendError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowKind {
    Rag,
    Scoring,
    Document,
    Ask,
}

impl WorkflowKind {
    #[must_use]
    pub const fn ramp(self) -> ProgressRamp {
        match self {
            WorkflowKind::Rag | WorkflowKind::Document => ProgressRamp::RAG,
            WorkflowKind::Scoring => ProgressRamp::SCORING,
            WorkflowKind::Ask => ProgressRamp::ASK,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WorkflowKind::Rag => "answer generation",
            WorkflowKind::Scoring => "answer scoring",
            WorkflowKind::Document => "document loading",
            WorkflowKind::Ask => "the question",
        }
    }
}

/// What the user is told when a run fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureNotice {
    /// The backend answered with a non-2xx status.
    Rejected { status: u16 },
    /// A selected file could not be read before sending.
    LocalFile,
    /// Transport or decode failure.
    Unreachable,
}

impl FailureNotice {
    #[must_use]
    pub fn from_error(err: &BackendError) -> Self {
        match err {
            BackendError::HttpStatus(status) => FailureNotice::Rejected {
                status: status.as_u16(),
            },
            BackendError::Io { .. } => FailureNotice::LocalFile,
            _ => FailureNotice::Unreachable,
        }
    }

    #[must_use]
    pub fn message(&self, kind: WorkflowKind) -> String {
        match self {
            FailureNotice::Rejected { status } => {
                format!("The backend rejected {} (HTTP {status}).", kind.label())
            }
            FailureNotice::LocalFile => format!(
                "Could not start {}: a selected file can no longer be read. Pick it again.",
                kind.label()
            ),
            FailureNotice::Unreachable => format!(
                "Could not complete {}: the backend is unreachable or sent an unreadable response.",
                kind.label()
            ),
        }
    }
}

/// Identifies one run so late timer ticks and resets from an older run are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunId(u64);

/// State slot for one workflow. Each workflow owns its own slot, so the two
/// never share a busy flag or a progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowVm<T> {
    kind: WorkflowKind,
    results: T,
    busy: bool,
    progress: Progress,
    run: u64,
    failure: Option<FailureNotice>,
}

impl<T: Default> WorkflowVm<T> {
    #[must_use]
    pub fn new(kind: WorkflowKind) -> Self {
        Self {
            kind,
            results: T::default(),
            busy: false,
            progress: Progress::ZERO,
            run: 0,
            failure: None,
        }
    }
}

impl<T> WorkflowVm<T> {
    #[must_use]
    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    #[must_use]
    pub fn results(&self) -> &T {
        &self.results
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress.value()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&FailureNotice> {
        self.failure.as_ref()
    }

    /// Begin a run. Returns `None` (and changes nothing) when the request is
    /// missing or a run is already in flight.
    pub fn start<R>(&mut self, request: Option<R>) -> Option<(RunId, R)> {
        let request = request?;
        if self.busy {
            return None;
        }
        self.run = self.run.wrapping_add(1);
        self.busy = true;
        self.progress = Progress::ZERO;
        self.failure = None;
        Some((RunId(self.run), request))
    }

    pub fn tick(&mut self, run: RunId) {
        if self.busy && run.0 == self.run {
            self.progress = self.progress.advance(self.kind.ramp());
        }
    }

    /// Record the outcome. Results are replaced only on success.
    pub fn finish(&mut self, run: RunId, outcome: Result<T, FailureNotice>) {
        if run.0 != self.run {
            return;
        }
        self.busy = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                self.progress = Progress::complete();
            }
            Err(notice) => self.failure = Some(notice),
        }
    }

    /// Delayed reset after completion or failure.
    pub fn settle(&mut self, run: RunId) {
        if run.0 == self.run && !self.busy {
            self.progress = Progress::ZERO;
        }
    }
}

mod answer_vm;
mod document_vm;
mod percent_fmt;
mod report;
mod scored_vm;
mod workflow_vm;

pub use answer_vm::{AnswerCardVm, map_answer_cards};
pub use document_vm::{AskAnswerVm, DocumentInfoVm, map_ask_answer, map_document_info};
pub use percent_fmt::{format_percent, format_ratio_percent};
pub use report::{answers_report, ask_report, document_report, scoring_report};
pub use scored_vm::{
    MetricsVm, ScoredAnswerCardVm, StatusIcon, StatusTone, TallyItemVm, map_metrics,
    map_scored_cards, map_tally, status_presentation,
};
pub use workflow_vm::{FailureNotice, RunId, WorkflowKind, WorkflowVm};

use std::collections::BTreeMap;

use review_core::model::{
    AgentInfo, Answer, AskResponse, FileSlot, RagResponse, ScoreMetrics, ScoreResponse,
    ScoreStatus, ScoredAnswer, SelectedFile,
};
use services::{Scripted, StubBackend};

use super::test_harness::{Seed, ViewKind, setup_view_harness};
use crate::vm::FailureNotice;

fn scored(question: &str, status: ScoreStatus, score: f64) -> ScoredAnswer {
    ScoredAnswer {
        id: None,
        question: question.to_string(),
        expected_answer: "expected".to_string(),
        rag_answer: "answered".to_string(),
        score,
        status,
        confidence: None,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn review_view_smoke_renders_pickers_and_actions() {
    let backend = StubBackend::new();
    let mut harness = setup_view_harness(ViewKind::Review, backend, Seed::default());

    harness.rebuild();
    let html = harness.render();

    for needle in [
        "PDF document",
        "Questions (JSON)",
        "Expected answers (JSON)",
        "Generate Answers",
        "Score Answers",
        "Load Document",
        "Ask",
        "No answers yet.",
        "No scores yet.",
    ] {
        assert!(html.contains(needle), "missing {needle} in {html}");
    }
    assert_eq!(harness.backend.rag_calls(), 0);
    assert_eq!(harness.backend.scoring_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn review_view_smoke_shows_selected_file_names() {
    let mut seed = Seed::default();
    seed.selection
        .select(FileSlot::Pdf, SelectedFile::from_path("/tmp/report.pdf"))
        .unwrap();
    let mut harness = setup_view_harness(ViewKind::Review, StubBackend::new(), seed);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("report.pdf"), "missing file name in {html}");
    assert!(html.contains("No file selected"), "missing empty slot in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn review_view_smoke_renders_generated_answers() {
    let mut seed = Seed::default();
    let (run, ()) = seed.rag.start(Some(())).unwrap();
    seed.rag.finish(
        run,
        Ok(RagResponse {
            answers: vec![Answer {
                id: None,
                question: "What is the refund window?".to_string(),
                answer: "Thirty days.".to_string(),
                confidence: Some(0.9),
                source_count: Some(3),
            }],
            total_questions: Some(1),
            pdf_info: None,
        }),
    );
    let mut harness = setup_view_harness(ViewKind::Review, StubBackend::new(), seed);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("What is the refund window?"), "missing question in {html}");
    assert!(html.contains("Thirty days."), "missing answer in {html}");
    assert!(html.contains("Confidence 90.0%"), "missing confidence in {html}");
    assert!(html.contains("3 sources"), "missing sources in {html}");
    assert!(!html.contains("No answers yet."), "stale empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn review_view_smoke_renders_scores_with_tally() {
    let mut seed = Seed::default();
    let (run, ()) = seed.scoring.start(Some(())).unwrap();
    seed.scoring.finish(
        run,
        Ok(ScoreResponse {
            scored_answers: vec![
                scored("Q1", ScoreStatus::Excellent, 0.853),
                scored("Q2", ScoreStatus::Good, 0.7),
                scored("Q3", ScoreStatus::Poor, 0.2),
                scored("Q4", ScoreStatus::Excellent, 0.9),
            ],
            metrics: Some(ScoreMetrics {
                total_questions: 4,
                average_score: 0.66,
                excellent_count: 2,
                good_count: 1,
                poor_count: 1,
                pass_rate: 75.0,
            }),
        }),
    );
    let mut harness = setup_view_harness(ViewKind::Review, StubBackend::new(), seed);

    harness.rebuild();
    let html = harness.render();

    for needle in [
        "85.3%",
        "tone-success",
        "tone-warning",
        "tone-danger",
        "data-icon=\"check\"",
        "Excellent: 2",
        "Good: 1",
        "Poor: 1",
        "75.0%",
    ] {
        assert!(html.contains(needle), "missing {needle} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn review_view_smoke_shows_failure_notice() {
    let mut seed = Seed::default();
    let (run, ()) = seed.rag.start(Some(())).unwrap();
    seed.rag
        .finish(run, Err(FailureNotice::Rejected { status: 502 }));
    let mut harness = setup_view_harness(ViewKind::Review, StubBackend::new(), seed);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("HTTP 502"), "missing status in {html}");
    assert!(html.contains("No answers yet."), "results should stay empty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn health_badge_reports_backend_online() {
    let mut harness = setup_view_harness(ViewKind::Review, StubBackend::new(), Seed::default());

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Backend online"), "missing online badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn health_badge_reports_unreachable_backend() {
    let backend = StubBackend::new();
    backend.script_health(Scripted::Unreachable);
    let mut harness = setup_view_harness(ViewKind::Review, backend, Seed::default());

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Backend unreachable"), "missing down badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ask_panel_smoke_renders_answer_with_sources() {
    let mut seed = Seed::default();
    seed.question = "Who signs off on refunds?".to_string();
    let (run, ()) = seed.ask.start(Some(())).unwrap();
    seed.ask.finish(
        run,
        Ok(Some(AskResponse {
            question: "Who signs off on refunds?".to_string(),
            answer: "The finance lead.".to_string(),
            confidence: Some(0.456),
            source_count: Some(2),
            sources: vec![
                "Refunds above 100 EUR need finance approval".to_string(),
                "The finance lead owns approvals".to_string(),
            ],
        })),
    );
    let mut harness = setup_view_harness(ViewKind::Review, StubBackend::new(), seed);

    harness.rebuild();
    let html = harness.render();

    for needle in [
        "Who signs off on refunds?",
        "The finance lead.",
        "Confidence 45.6%",
        "2 sources",
        "Refunds above 100 EUR need finance approval",
    ] {
        assert!(html.contains(needle), "missing {needle} in {html}");
    }
    assert_eq!(harness.backend.ask_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn ask_panel_smoke_shows_loaded_document_details() {
    let backend = StubBackend::new();
    let mut details = BTreeMap::new();
    details.insert("chunk_size".to_string(), serde_json::Value::from(1000));
    backend.script_agent_info(Scripted::Reply(AgentInfo {
        status: "Document loaded".to_string(),
        details,
    }));
    let mut harness = setup_view_harness(ViewKind::Review, backend, Seed::default());

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("doc-status-loaded"), "missing loaded status in {html}");
    assert!(html.contains("chunk size"), "missing detail label in {html}");
    assert!(html.contains("1000"), "missing detail value in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unreadable_local_file_gets_its_own_notice() {
    let mut seed = Seed::default();
    let (run, ()) = seed.document.start(Some(())).unwrap();
    seed.document.finish(run, Err(FailureNotice::LocalFile));
    let mut harness = setup_view_harness(ViewKind::Review, StubBackend::new(), seed);

    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Could not start document loading: a selected file can no longer be read."),
        "missing local file notice in {html}"
    );
    assert!(!html.contains("unreachable or sent"), "wrong notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn formats_view_smoke_shows_both_examples() {
    let mut harness = setup_view_harness(ViewKind::Formats, StubBackend::new(), Seed::default());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Questions file"), "missing questions section in {html}");
    assert!(html.contains("Expected answers file"), "missing answers section in {html}");
    assert!(html.contains("expected_answer"), "missing example field in {html}");
}

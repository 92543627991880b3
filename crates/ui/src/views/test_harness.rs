use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use review_core::model::{AskResponse, DocumentUpload, RagResponse, ScoreResponse, UploadSelection};
use services::{ReviewService, StubBackend};

use crate::context::{UiApp, build_app_context};
use crate::views::{FormatsView, ReviewSlots, ReviewView};
use crate::vm::{WorkflowKind, WorkflowVm};

struct TestApp {
    review_service: Arc<ReviewService>,
}

impl UiApp for TestApp {
    fn review_service(&self) -> Arc<ReviewService> {
        Arc::clone(&self.review_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Review,
    Formats,
}

/// Initial page state, as if the user had already picked files or run a workflow.
#[derive(Clone)]
pub struct Seed {
    pub selection: UploadSelection,
    pub rag: WorkflowVm<RagResponse>,
    pub scoring: WorkflowVm<ScoreResponse>,
    pub question: String,
    pub document: WorkflowVm<Option<DocumentUpload>>,
    pub ask: WorkflowVm<Option<AskResponse>>,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            selection: UploadSelection::default(),
            rag: WorkflowVm::new(WorkflowKind::Rag),
            scoring: WorkflowVm::new(WorkflowKind::Scoring),
            question: String::new(),
            document: WorkflowVm::new(WorkflowKind::Document),
            ask: WorkflowVm::new(WorkflowKind::Ask),
        }
    }
}

impl Seed {
    fn into_slots(self) -> ReviewSlots {
        ReviewSlots {
            selection: Signal::new(self.selection),
            question: Signal::new(self.question),
            rag: Signal::new(self.rag),
            scoring: Signal::new(self.scoring),
            document: Signal::new(self.document),
            ask: Signal::new(self.ask),
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: Seed,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let seed = props.seed.clone();
    use_context_provider(move || seed.into_slots());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Review => rsx! { ReviewView {} },
        ViewKind::Formats => rsx! { FormatsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: StubBackend,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, backend: StubBackend, seed: Seed) -> ViewHarness {
    let review_service = Arc::new(ReviewService::new(Arc::new(backend.clone())));
    let app = Arc::new(TestApp { review_service });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, seed });

    ViewHarness { dom, backend }
}

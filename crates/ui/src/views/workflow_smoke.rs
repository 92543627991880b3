use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use review_core::progress::{PROGRESS_CEILING, PROGRESS_RESET_DELAY};

use super::workflow::launch_workflow;
use crate::vm::{FailureNotice, WorkflowKind, WorkflowVm};

type Slot = Signal<WorkflowVm<Option<u32>>>;

#[derive(Clone, Copy, PartialEq)]
struct Run {
    kind: WorkflowKind,
    latency: Duration,
    fails: bool,
    unmount_after: Option<Duration>,
}

impl Run {
    fn succeeding(kind: WorkflowKind) -> Self {
        Self {
            kind,
            latency: Duration::from_secs(10),
            fails: false,
            unmount_after: None,
        }
    }
}

#[derive(Props, Clone)]
struct HostProps {
    run: Run,
    slot_out: Rc<Cell<Option<Slot>>>,
}

impl PartialEq for HostProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Owns the slot the way the layout does and can drop the panel mid-run.
#[component]
fn Host(props: HostProps) -> Element {
    let run = props.run;
    let slot = use_signal(|| WorkflowVm::<Option<u32>>::new(run.kind));
    let mut mounted = use_signal(|| true);
    let slot_out = props.slot_out.clone();
    use_hook(move || {
        slot_out.set(Some(slot));
        if let Some(delay) = run.unmount_after {
            spawn(async move {
                tokio::time::sleep(delay).await;
                mounted.set(false);
            });
        }
    });

    rsx! {
        if mounted() {
            Launcher { run, slot }
        } else {
            p { "panel closed" }
        }
    }
}

#[component]
fn Launcher(run: Run, slot: Slot) -> Element {
    use_hook(move || {
        spawn(async move {
            launch_workflow(slot, Some(()), move |()| async move {
                tokio::time::sleep(run.latency).await;
                if run.fails {
                    Err(FailureNotice::Unreachable)
                } else {
                    Ok(Some(7))
                }
            });
        });
    });

    rsx! {
        div { class: "launcher", "running" }
    }
}

struct Driven {
    dom: VirtualDom,
    slot: Slot,
    /// `(busy, progress)` observed after each turn of the loop.
    samples: Vec<(bool, u8)>,
}

impl Driven {
    fn last(&self) -> WorkflowVm<Option<u32>> {
        let slot = self.slot;
        self.dom.in_runtime(|| (*slot.peek()).clone())
    }
}

async fn drive(run: Run, total: Duration) -> Driven {
    let slot_out = Rc::new(Cell::new(None));
    let mut dom = VirtualDom::new_with_props(
        Host,
        HostProps {
            run,
            slot_out: Rc::clone(&slot_out),
        },
    );
    dom.rebuild_in_place();
    let slot = slot_out.get().expect("host stores its slot on first render");

    let started = tokio::time::Instant::now();
    let mut samples = Vec::new();
    for _ in 0..10_000 {
        if started.elapsed() >= total {
            break;
        }
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
        samples.push(dom.in_runtime(|| {
            let vm = slot.peek();
            (vm.is_busy(), vm.progress())
        }));
    }

    Driven { dom, slot, samples }
}

async fn assert_full_ramp(kind: WorkflowKind) {
    let run = Run::succeeding(kind);
    let driven = drive(run, run.latency + PROGRESS_RESET_DELAY + Duration::from_secs(1)).await;

    let busy: Vec<u8> = driven
        .samples
        .iter()
        .filter(|(busy, _)| *busy)
        .map(|(_, progress)| *progress)
        .collect();
    assert!(!busy.is_empty(), "{kind:?} never went busy");
    assert!(
        busy.iter().all(|progress| *progress <= PROGRESS_CEILING),
        "{kind:?} passed the ceiling while busy: {busy:?}"
    );
    assert!(
        busy.contains(&PROGRESS_CEILING),
        "{kind:?} never reached the ceiling: {busy:?}"
    );
    assert!(
        driven.samples.contains(&(false, 100)),
        "{kind:?} never showed completion"
    );
    assert_eq!(driven.samples.last(), Some(&(false, 0)));

    let last = driven.last();
    assert_eq!(last.results(), &Some(7));
    assert!(last.failure().is_none());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn rag_run_ramps_completes_and_resets() {
    assert_full_ramp(WorkflowKind::Rag).await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn scoring_run_ramps_completes_and_resets() {
    assert_full_ramp(WorkflowKind::Scoring).await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn document_run_ramps_completes_and_resets() {
    assert_full_ramp(WorkflowKind::Document).await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ask_run_ramps_completes_and_resets() {
    assert_full_ramp(WorkflowKind::Ask).await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failed_run_keeps_results_and_resets() {
    let run = Run {
        fails: true,
        latency: Duration::from_secs(2),
        ..Run::succeeding(WorkflowKind::Scoring)
    };
    let driven = drive(run, run.latency + PROGRESS_RESET_DELAY + Duration::from_secs(1)).await;

    assert!(
        driven.samples.iter().all(|(_, progress)| *progress < 100),
        "failure must not show completion"
    );
    assert_eq!(driven.samples.last(), Some(&(false, 0)));
    let last = driven.last();
    assert_eq!(last.failure(), Some(&FailureNotice::Unreachable));
    assert_eq!(last.results(), &None);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn unmounting_panel_mid_run_still_settles_slot() {
    let run = Run {
        latency: Duration::from_millis(300),
        unmount_after: Some(Duration::from_millis(100)),
        ..Run::succeeding(WorkflowKind::Rag)
    };
    let driven = drive(run, Duration::from_secs(3)).await;

    let html = dioxus_ssr::render(&driven.dom);
    assert!(html.contains("panel closed"), "panel still mounted: {html}");
    assert!(!html.contains("launcher"), "panel still mounted: {html}");

    assert!(driven.samples.contains(&(false, 100)));
    let last = driven.last();
    assert!(!last.is_busy());
    assert_eq!(last.progress(), 0);
    assert_eq!(last.results(), &Some(7));
}

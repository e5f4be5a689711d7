use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, RunnerConfig, TrialRunner};
use trial_core::model::Catalog;
use trial_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::views::ExperimentShell;
use crate::views::experiment::JudgeTestHandles;

/// Moves a fresh runner into the state a test wants to render.
pub type Prepare = fn(&mut TrialRunner);

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
    clock: Clock,
    config: RunnerConfig,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn runner_config(&self) -> RunnerConfig {
        self.config
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    prepare: Prepare,
    judge_handles: Option<JudgeTestHandles>,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    if let Some(handles) = props.judge_handles.clone() {
        use_context_provider(|| handles);
    }
    let runner = use_signal(|| {
        let mut runner = ctx.new_runner();
        (props.prepare)(&mut runner);
        runner
    });
    rsx! { ExperimentShell { runner } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub judge_handles: Option<JudgeTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Answers through the experiment screen's own judge callback.
    pub fn judge(&mut self, says_valid: bool) {
        let handles = self.judge_handles.as_ref().expect("judge handles installed");
        handles.judge().call(says_valid);
        drive_dom(&mut self.dom);
    }

    /// Lets spawned tasks such as the feedback timer run, then re-renders.
    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(200), self.dom.wait_for_work()).await;
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

pub fn setup_view_harness(prepare: Prepare) -> ViewHarness {
    build_harness(Catalog::builtin(), prepare, None)
}

/// Harness over `catalog` whose experiment screen exposes its judge callback.
pub fn setup_judge_harness(catalog: Catalog, prepare: Prepare) -> ViewHarness {
    build_harness(catalog, prepare, Some(JudgeTestHandles::default()))
}

fn build_harness(
    catalog: Catalog,
    prepare: Prepare,
    judge_handles: Option<JudgeTestHandles>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: Arc::new(catalog),
        clock: fixed_clock(),
        config: RunnerConfig::default()
            .with_seed(17)
            .with_feedback_delay(Duration::from_millis(10)),
    });

    let dom = VirtualDom::new_with_props(
        ShellHarness,
        ShellHarnessProps {
            app,
            prepare,
            judge_handles: judge_handles.clone(),
        },
    );
    ViewHarness { dom, judge_handles }
}

/// Renders the shell after `prepare` has run.
pub fn render_with(prepare: Prepare) -> String {
    let mut harness = setup_view_harness(prepare);
    harness.rebuild();
    harness.render()
}

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use services::{FeedbackResolution, TrialRunner};

use crate::context::AppContext;
use crate::vm::map_trial;

#[component]
pub fn ExperimentView(runner: Signal<TrialRunner>) -> Element {
    let delay = use_context::<AppContext>().feedback_delay();

    // Schedules the advance behind the feedback delay. The ticket pins the
    // judged trial so a reset or cancel in between turns the timer into a no-op.
    let judge = use_callback(move |says_valid: bool| {
        let mut runner = runner;
        let ticket = match runner.write().judge(says_valid) {
            Ok(ticket) => ticket,
            Err(err) => {
                tracing::debug!(%err, "judgement ignored");
                return;
            }
        };
        spawn(async move {
            tokio::time::sleep(delay).await;
            let mut runner = runner;
            match runner.write().complete_feedback(ticket) {
                Ok(FeedbackResolution::Finished) => tracing::info!("experiment finished"),
                Ok(_) => {}
                Err(err) => tracing::warn!(%err, "could not apply judgement"),
            }
        });
    });

    #[cfg(test)]
    if let Some(handles) = try_consume_context::<JudgeTestHandles>() {
        handles.register(judge);
    }

    let on_key = move |evt: KeyboardEvent| {
        if let Key::Character(value) = evt.data.key() {
            match value.as_str() {
                "1" | "v" => {
                    evt.prevent_default();
                    judge.call(true);
                }
                "0" | "n" => {
                    evt.prevent_default();
                    judge.call(false);
                }
                _ => {}
            }
        }
    };

    let Some(vm) = map_trial(&runner.read()) else {
        return rsx! {};
    };

    rsx! {
        div { class: "experiment", tabindex: "0", onkeydown: on_key,
            p { class: "progress", "{vm.progress_label}" }
            if let Some(statement) = vm.statement.as_ref() {
                p { class: "statement", "{statement}" }
                div { class: "button-group",
                    button {
                        class: "valid-button",
                        r#type: "button",
                        disabled: vm.awaiting_feedback,
                        onclick: move |_| judge.call(true),
                        "Valid"
                    }
                    button {
                        class: "invalid-button",
                        r#type: "button",
                        disabled: vm.awaiting_feedback,
                        onclick: move |_| judge.call(false),
                        "Not Valid"
                    }
                }
            }
            div { class: "control-buttons",
                button {
                    r#type: "button",
                    onclick: move |_| {
                        let mut runner = runner;
                        if let Err(err) = runner.write().request_cancel() {
                            tracing::debug!(%err, "cancel ignored");
                        }
                    },
                    "Cancel"
                }
                button {
                    r#type: "button",
                    onclick: move |_| {
                        let mut runner = runner;
                        if let Err(err) = runner.write().request_reset() {
                            tracing::debug!(%err, "reset ignored");
                        }
                    },
                    "Reset"
                }
            }
            if let Some(feedback) = vm.feedback_label {
                p { class: "feedback", "{feedback}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct JudgeTestHandles {
    judge: Rc<RefCell<Option<Callback<bool>>>>,
}

#[cfg(test)]
impl JudgeTestHandles {
    pub(crate) fn register(&self, judge: Callback<bool>) {
        *self.judge.borrow_mut() = Some(judge);
    }

    pub(crate) fn judge(&self) -> Callback<bool> {
        (*self.judge.borrow()).expect("judge callback registered")
    }
}

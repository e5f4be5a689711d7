use dioxus::prelude::*;
use services::{ConfirmOutcome, TrialRunner};

/// Overlay for the runner's pending confirmation or notice, if any.
#[component]
pub fn ConfirmModal(runner: Signal<TrialRunner>) -> Element {
    let Some(request) = runner.read().confirmation().cloned() else {
        return rsx! {};
    };

    let on_confirm = move |_| {
        let mut runner = runner;
        match runner.write().confirm() {
            Ok(ConfirmOutcome::Dropped(action)) => {
                tracing::debug!(?action, "confirmation no longer applies");
            }
            Ok(ConfirmOutcome::Applied(_)) => {}
            Err(err) => tracing::warn!(%err, "confirm failed"),
        }
    };
    let on_dismiss = move |_| {
        let mut runner = runner;
        if let Err(err) = runner.write().dismiss() {
            tracing::debug!(%err, "nothing to dismiss");
        }
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "dialog", aria_modal: "true",
                p { "{request.message}" }
                div { class: "modal-buttons",
                    if request.needs_choice() {
                        button {
                            class: "modal-button confirm",
                            r#type: "button",
                            onclick: on_confirm,
                            "{request.confirm_text}"
                        }
                        button {
                            class: "modal-button cancel",
                            r#type: "button",
                            onclick: on_dismiss,
                            "{request.cancel_text}"
                        }
                    } else {
                        button {
                            class: "modal-button",
                            r#type: "button",
                            onclick: on_dismiss,
                            "{request.confirm_text}"
                        }
                    }
                }
            }
        }
    }
}

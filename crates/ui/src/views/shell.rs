use dioxus::prelude::*;
use services::{Phase, TrialRunner};

use crate::views::{ConfirmModal, ExperimentView, ExplanationView, ResultsView, SetupView};

/// Page frame: fixed header, the active phase's screen, and any open dialog.
#[component]
pub fn ExperimentShell(runner: Signal<TrialRunner>) -> Element {
    let phase = runner.read().phase();

    rsx! {
        div { class: "container",
            div { class: "top-pane",
                h1 { "Comparison of Quotes vs. ---" }
                p {
                    "Below, you'll choose a group and how many tasks to attempt. "
                    "Then, for each expression, click \"Valid\" or \"Not Valid.\""
                }
            }
            div { class: "bottom-pane",
                match phase {
                    Phase::Explanation => rsx! { ExplanationView { runner } },
                    Phase::Setup => rsx! { SetupView { runner } },
                    Phase::Experiment => rsx! { ExperimentView { runner } },
                    Phase::Results => rsx! { ResultsView { runner } },
                }
            }
        }
        ConfirmModal { runner }
    }
}

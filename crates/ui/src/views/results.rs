use dioxus::prelude::*;
use services::TrialRunner;

use crate::vm::{ResultsVm, map_results};

#[component]
pub fn ResultsView(runner: Signal<TrialRunner>) -> Element {
    let Some(vm) = runner.read().results().as_ref().map(map_results) else {
        return rsx! {};
    };

    rsx! {
        div { class: "results",
            h2 { "Results" }
            p { "{vm.time_taken_label}" }
            p { "{vm.accuracy_label}" }
            p { "{vm.tally_label}" }
            if let Some(mean) = vm.mean_response_label.as_ref() {
                p { class: "results-mean", "{mean}" }
            }
            TrialTable { vm: vm.clone() }
            button {
                r#type: "button",
                onclick: move |_| {
                    let mut runner = runner;
                    if let Err(err) = runner.write().try_again() {
                        tracing::debug!(%err, "try again ignored");
                    }
                },
                "Try Again"
            }
        }
    }
}

#[component]
fn TrialTable(vm: ResultsVm) -> Element {
    rsx! {
        table { class: "results-trials",
            thead {
                tr {
                    th { "#" }
                    th { "Expression" }
                    th { "Answer" }
                    th { "Outcome" }
                    th { "Response" }
                }
            }
            tbody {
                for row in vm.rows.iter() {
                    tr { key: "{row.number}",
                        td { "{row.number}" }
                        td { class: "statement", "{row.statement}" }
                        td { "{row.answer_label}" }
                        td { "{row.outcome_label}" }
                        td { "{row.response_label}" }
                    }
                }
            }
        }
    }
}

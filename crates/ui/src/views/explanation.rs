use dioxus::prelude::*;
use services::TrialRunner;

#[component]
pub fn ExplanationView(runner: Signal<TrialRunner>) -> Element {
    rsx! {
        div { class: "explanation",
            h2 { "Welcome to the Validation Experiment" }
            p {
                "In this experiment, you will see strings that may or may not be valid expressions. "
                "Your job is to decide if each expression is valid "
                strong { "([1])" }
                " or invalid "
                strong { "([0])" }
                "."
            }
            p { "We have two groups of expressions:" }
            ul {
                li {
                    strong { "Group A (Quotes)" }
                    ": uses quotation marks, e.g., \"X\"=\"X\"."
                }
                li {
                    strong { "Group B (---)" }
                    ": uses the "
                    code { "---" }
                    " operator for string concatenation."
                }
            }
            p {
                "We want to see whether using quotes or "
                code { "---" }
                " affects accuracy or speed."
            }
            p { "When ready, click the button below to proceed." }
            button {
                r#type: "button",
                onclick: move |_| {
                    let mut runner = runner;
                    if let Err(err) = runner.write().start() {
                        tracing::debug!(%err, "start ignored");
                    }
                },
                "Start"
            }
        }
    }
}

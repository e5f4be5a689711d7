use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ExperimentShell;

#[component]
pub fn App() -> Element {
    let ctx = try_consume_context::<AppContext>().unwrap_or_default();
    let runner = use_signal(|| ctx.new_runner());
    use_context_provider(|| ctx.clone());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Comparison of Quotes vs. ---" }

        div { class: "app-root dark-mode",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ExperimentShell { runner }
            }
        }
    }
}

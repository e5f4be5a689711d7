use dioxus::prelude::*;
use services::TrialRunner;
use trial_core::model::GroupId;

use crate::vm::map_setup;

#[component]
pub fn SetupView(runner: Signal<TrialRunner>) -> Element {
    let vm = map_setup(&runner.read());

    let on_group = move |evt: FormEvent| {
        let mut runner = runner;
        match evt.value().parse::<GroupId>() {
            Ok(group) => {
                if let Err(err) = runner.write().select_group(group) {
                    tracing::debug!(%err, "group change ignored");
                }
            }
            Err(err) => tracing::warn!(%err, "unexpected group selector value"),
        }
    };

    let on_begin = move |_| {
        let mut runner = runner;
        let input = runner.read().count_input().to_string();
        // Rejected input is surfaced through the runner's notice dialog.
        if let Err(err) = runner.write().begin_experiment(&input) {
            tracing::debug!(%err, "experiment not started");
        }
    };

    rsx! {
        div { class: "setup",
            p { "Select which group of tasks to use:" }
            select {
                value: "{vm.selected_value}",
                onchange: on_group,
                for group in vm.groups.iter() {
                    option {
                        key: "{group.value}",
                        value: "{group.value}",
                        selected: group.selected,
                        "{group.name}"
                    }
                }
            }

            p { "{vm.count_prompt}" }
            input {
                r#type: "number",
                min: "1",
                max: "{vm.max_count}",
                value: "{vm.count_input}",
                oninput: move |evt| {
                    let mut runner = runner;
                    runner.write().set_count_input(evt.value());
                },
            }
            button { r#type: "button", onclick: on_begin, "Begin Experiment" }
        }
    }
}

use services::ExperimentResults;

use crate::vm::time_fmt::{format_percent, format_seconds};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialRowVm {
    pub number: usize,
    pub statement: String,
    pub answer_label: &'static str,
    pub outcome_label: &'static str,
    pub response_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub time_taken_label: String,
    pub accuracy_label: String,
    pub tally_label: String,
    pub mean_response_label: Option<String>,
    pub rows: Vec<TrialRowVm>,
}

#[must_use]
pub fn map_results(results: &ExperimentResults) -> ResultsVm {
    #[allow(clippy::cast_precision_loss)]
    let rows = results
        .trials
        .iter()
        .map(|trial| TrialRowVm {
            number: trial.trial_index + 1,
            statement: trial.item.text().to_string(),
            answer_label: if trial.answered_valid { "Valid" } else { "Not Valid" },
            outcome_label: if trial.correct { "Correct" } else { "Incorrect" },
            response_label: format!("{} s", format_seconds(trial.response_ms as f64 / 1000.0)),
        })
        .collect();

    ResultsVm {
        time_taken_label: format!(
            "Time Taken: {} seconds",
            format_seconds(results.elapsed_seconds())
        ),
        accuracy_label: format!("Accuracy: {}%", format_percent(results.accuracy_percent())),
        tally_label: format!("({} out of {})", results.correct, results.requested),
        mean_response_label: results
            .mean_response_seconds()
            .map(|secs| format!("Mean response: {} seconds", format_seconds(secs))),
        rows,
    }
}

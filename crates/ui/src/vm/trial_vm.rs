use services::TrialRunner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialVm {
    pub progress_label: String,
    pub statement: Option<String>,
    pub feedback_label: Option<&'static str>,
    /// Judgement buttons are inert while feedback is on screen.
    pub awaiting_feedback: bool,
}

/// `None` unless the runner holds a session.
#[must_use]
pub fn map_trial(runner: &TrialRunner) -> Option<TrialVm> {
    let progress = runner.progress()?;
    let feedback = runner.feedback();

    Some(TrialVm {
        progress_label: format!("Trial {} / {}", progress.trial_number(), progress.total),
        statement: runner.current_item().map(|item| item.text().to_string()),
        feedback_label: feedback.map(services::Feedback::label),
        awaiting_feedback: feedback.is_some(),
    })
}

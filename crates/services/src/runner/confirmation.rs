/// What confirming a pending request does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Discard the running session and go back to setup.
    CancelExperiment,
    /// Re-sample a session of the same size and restart timing.
    ResetExperiment,
    /// Plain message; the only answer is acknowledging it.
    Notice,
}

/// A question or warning waiting for the participant. At most one is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub message: String,
    pub action: ConfirmAction,
    pub confirm_text: String,
    pub cancel_text: String,
}

impl ConfirmationRequest {
    #[must_use]
    pub fn ask(message: impl Into<String>, action: ConfirmAction) -> Self {
        Self {
            message: message.into(),
            action,
            confirm_text: "Yes".to_string(),
            cancel_text: "No".to_string(),
        }
    }

    #[must_use]
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: ConfirmAction::Notice,
            confirm_text: "OK".to_string(),
            cancel_text: String::new(),
        }
    }

    #[must_use]
    pub fn cancel_experiment() -> Self {
        Self::ask(
            "Are you sure you want to cancel the experiment?",
            ConfirmAction::CancelExperiment,
        )
    }

    #[must_use]
    pub fn reset_experiment() -> Self {
        Self::ask(
            "Are you sure you want to reset the experiment?",
            ConfirmAction::ResetExperiment,
        )
    }

    /// Whether the participant has to pick between confirm and cancel.
    #[must_use]
    pub fn needs_choice(&self) -> bool {
        self.action != ConfirmAction::Notice
    }
}

/// Result of answering a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Applied(ConfirmAction),
    /// The session the request referred to is gone or already finished.
    Dropped(ConfirmAction),
}

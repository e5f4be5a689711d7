use crate::sessions::TrialRecord;

/// Message shown between a judgement and the next trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Incorrect }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct!",
            Feedback::Incorrect => "Incorrect!",
        }
    }
}

/// Identity of the trial a delayed advance was scheduled for.
///
/// The runner bumps its generation whenever a session is created, reset or
/// discarded, so a ticket from an earlier session never matches again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackTicket {
    pub generation: u64,
    pub trial_index: usize,
}

/// What happened when a feedback timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackResolution {
    /// Ticket no longer matches the runner; nothing changed.
    Stale,
    NextTrial,
    Finished,
}

/// Judgement waiting for its feedback delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingFeedback {
    pub ticket: FeedbackTicket,
    pub feedback: Feedback,
    pub record: TrialRecord,
}

//! Shared error types for the services crate.

use thiserror::Error;

use crate::runner::Phase;

/// Errors emitted while sampling items from a task group.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SampleError {
    #[error("cannot sample {requested} items from a group of {available}")]
    OutOfRange { requested: usize, available: usize },
}

/// Rejected item-count input on the setup screen.
///
/// Both variants render the same participant-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountError {
    #[error("Please enter a valid number between 1 and {max}")]
    NotANumber { raw: String, max: usize },
    #[error("Please enter a valid number between 1 and {max}")]
    OutOfRange { value: i64, max: usize },
}

impl CountError {
    /// Upper bound quoted in the message.
    #[must_use]
    pub fn max(&self) -> usize {
        match self {
            CountError::NotANumber { max, .. } | CountError::OutOfRange { max, .. } => *max,
        }
    }
}

/// Errors emitted by session bookkeeping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no items available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("session is not complete yet")]
    NotComplete,
    #[error("judgement for trial {got} does not match current trial {expected}")]
    TrialMismatch { expected: usize, got: usize },
}

/// Errors emitted by `TrialRunner` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunnerError {
    #[error("action requires the {expected:?} phase, current phase is {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("a judgement is still showing feedback")]
    FeedbackPending,
    #[error("a confirmation is waiting for an answer")]
    ConfirmationPending,
    #[error("no confirmation is pending")]
    NoConfirmation,
    #[error(transparent)]
    InvalidCount(#[from] CountError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

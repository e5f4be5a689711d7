#![forbid(unsafe_code)]

pub mod error;
pub mod runner;
pub mod sampler;
pub mod sessions;

pub use trial_core::Clock;

pub use error::{CountError, RunnerError, SampleError, SessionError};
pub use runner::{
    ConfirmAction, ConfirmOutcome, ConfirmationRequest, DEFAULT_FEEDBACK_DELAY, Feedback,
    FeedbackResolution, FeedbackTicket, Phase, RunnerConfig, TrialRunner, parse_count,
};
pub use sampler::Sampler;
pub use sessions::{ExperimentResults, ExperimentSession, SessionProgress, TrialRecord};

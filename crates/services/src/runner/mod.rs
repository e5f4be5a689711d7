mod config;
mod confirmation;
mod feedback;
mod phase;
mod setup;
mod trial_runner;

pub use config::{DEFAULT_FEEDBACK_DELAY, RunnerConfig};
pub use confirmation::{ConfirmAction, ConfirmOutcome, ConfirmationRequest};
pub use feedback::{Feedback, FeedbackResolution, FeedbackTicket};
pub use phase::Phase;
pub use setup::parse_count;
pub use trial_runner::TrialRunner;

mod progress;
mod results;
mod session;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use results::ExperimentResults;
pub use session::{ExperimentSession, TrialRecord};

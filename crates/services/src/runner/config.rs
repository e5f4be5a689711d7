use std::time::Duration;

use trial_core::model::GroupId;

/// How long "Correct!" / "Incorrect!" stays on screen before the next trial.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1_000);

/// Knobs for a `TrialRunner`, filled from the command line by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub feedback_delay: Duration,
    /// Seeds the sampler for reproducible item orders.
    pub seed: Option<u64>,
    pub initial_group: GroupId,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            seed: None,
            initial_group: GroupId::default(),
        }
    }
}

impl RunnerConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    #[must_use]
    pub fn with_initial_group(mut self, group: GroupId) -> Self {
        self.initial_group = group;
        self
    }
}

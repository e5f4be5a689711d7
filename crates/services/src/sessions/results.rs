use chrono::{DateTime, Duration, Utc};

use trial_core::model::GroupId;
use trial_core::time::duration_secs;

use super::session::{ExperimentSession, TrialRecord};
use crate::error::SessionError;

/// Final figures for a completed session.
///
/// Presentation-agnostic: the UI decides how to round and label values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResults {
    pub group: GroupId,
    pub requested: usize,
    pub correct: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub trials: Vec<TrialRecord>,
}

impl ExperimentResults {
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while trials remain.
    pub fn from_session(session: &ExperimentSession) -> Result<Self, SessionError> {
        let completed_at = session.completed_at().ok_or(SessionError::NotComplete)?;
        Ok(Self {
            group: session.group(),
            requested: session.requested_count(),
            correct: session.correct_count(),
            started_at: session.started_at(),
            completed_at,
            trials: session.records().to_vec(),
        })
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        duration_secs(self.elapsed())
    }

    /// `correct / requested * 100`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy_percent(&self) -> f64 {
        if self.requested == 0 {
            return 0.0;
        }
        self.correct as f64 / self.requested as f64 * 100.0
    }

    /// Mean time from an item appearing to the participant's answer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_response_seconds(&self) -> Option<f64> {
        if self.trials.is_empty() {
            return None;
        }
        let total: i64 = self.trials.iter().map(|t| t.response_ms).sum();
        Some(total as f64 / self.trials.len() as f64 / 1000.0)
    }
}

use chrono::{DateTime, Utc};
use std::fmt;

use trial_core::model::{GroupId, TaskItem};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── TRIAL RECORD ──────────────────────────────────────────────────────────────
//

/// Outcome of one presentation-and-judgement cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRecord {
    pub trial_index: usize,
    pub item: TaskItem,
    pub answered_valid: bool,
    pub correct: bool,
    /// Milliseconds from the item appearing to the participant answering.
    pub response_ms: i64,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory run through a sampled, shuffled subset of one group.
///
/// Judging is split in two: [`ExperimentSession::judge`] scores the current item
/// without moving on, [`ExperimentSession::apply`] records the result and advances
/// once the feedback has been shown.
pub struct ExperimentSession {
    group: GroupId,
    items: Vec<TaskItem>,
    current: usize,
    correct: usize,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    shown_at: DateTime<Utc>,
    records: Vec<TrialRecord>,
}

impl ExperimentSession {
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no items are provided.
    pub fn new(
        group: GroupId,
        items: Vec<TaskItem>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            group,
            items,
            current: 0,
            correct: 0,
            started_at,
            completed_at: None,
            shown_at: started_at,
            records: Vec::new(),
        })
    }

    #[must_use]
    pub fn group(&self) -> GroupId {
        self.group
    }

    #[must_use]
    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    /// Number of items the participant asked for.
    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&TaskItem> {
        self.items.get(self.current)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.items.len(),
            answered: self.current,
            remaining: self.items.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    /// Score an answer for the current item without advancing.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if every item has been answered.
    pub fn judge(
        &self,
        says_valid: bool,
        judged_at: DateTime<Utc>,
    ) -> Result<TrialRecord, SessionError> {
        let item = self.current_item().ok_or(SessionError::Completed)?;
        let response_ms = (judged_at - self.shown_at).num_milliseconds().max(0);

        Ok(TrialRecord {
            trial_index: self.current,
            item: item.clone(),
            answered_valid: says_valid,
            correct: item.is_correct_answer(says_valid),
            response_ms,
        })
    }

    /// Record a judged trial and move to the next item.
    ///
    /// Returns `true` when this was the last item; `applied_at` then becomes the
    /// completion time, otherwise it is when the next item appears.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished and
    /// `SessionError::TrialMismatch` if `record` was judged against another trial.
    pub fn apply(
        &mut self,
        record: TrialRecord,
        applied_at: DateTime<Utc>,
    ) -> Result<bool, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if record.trial_index != self.current {
            return Err(SessionError::TrialMismatch {
                expected: self.current,
                got: record.trial_index,
            });
        }

        if record.correct {
            self.correct += 1;
        }
        self.records.push(record);
        self.current += 1;

        if self.current >= self.items.len() {
            self.completed_at = Some(applied_at);
            return Ok(true);
        }
        self.shown_at = applied_at;
        Ok(false)
    }
}

impl fmt::Debug for ExperimentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperimentSession")
            .field("group", &self.group)
            .field("items_len", &self.items.len())
            .field("current", &self.current)
            .field("correct", &self.correct)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use std::fmt;
use std::sync::Arc;

use trial_core::Clock;
use trial_core::model::{Catalog, GroupId, TaskGroup, TaskItem};

use super::config::RunnerConfig;
use super::confirmation::{ConfirmAction, ConfirmOutcome, ConfirmationRequest};
use super::feedback::{Feedback, FeedbackResolution, FeedbackTicket, PendingFeedback};
use super::phase::Phase;
use super::setup::parse_count;
use crate::error::{RunnerError, SessionError};
use crate::sampler::Sampler;
use crate::sessions::{ExperimentResults, ExperimentSession, SessionProgress};

/// State container for the whole experiment.
///
/// Every change goes through one of the transition methods below; the UI only
/// reads the accessors and forwards participant actions.
pub struct TrialRunner {
    catalog: Arc<Catalog>,
    sampler: Sampler,
    clock: Clock,
    config: RunnerConfig,
    phase: Phase,
    selected_group: GroupId,
    count_input: String,
    session: Option<ExperimentSession>,
    confirmation: Option<ConfirmationRequest>,
    feedback: Option<PendingFeedback>,
    generation: u64,
}

impl TrialRunner {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock, config: RunnerConfig) -> Self {
        Self {
            catalog,
            sampler: Sampler::from_seed(config.seed),
            clock,
            config,
            phase: Phase::Explanation,
            selected_group: config.initial_group,
            count_input: String::new(),
            session: None,
            confirmation: None,
            feedback: None,
            generation: 0,
        }
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable access for driving a fixed clock.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn selected_group(&self) -> GroupId {
        self.selected_group
    }

    #[must_use]
    pub fn selected_task_group(&self) -> &TaskGroup {
        self.catalog.group(self.selected_group)
    }

    /// Largest count accepted by `begin_experiment` for the selected group.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.selected_task_group().len()
    }

    #[must_use]
    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    #[must_use]
    pub fn session(&self) -> Option<&ExperimentSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&TaskItem> {
        match self.phase {
            Phase::Experiment => self.session.as_ref()?.current_item(),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.session.as_ref().map(ExperimentSession::progress)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback.as_ref().map(|pending| pending.feedback)
    }

    #[must_use]
    pub fn pending_ticket(&self) -> Option<FeedbackTicket> {
        self.feedback.as_ref().map(|pending| pending.ticket)
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&ConfirmationRequest> {
        self.confirmation.as_ref()
    }

    /// Bumped every time a session is created, reset or discarded.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn results(&self) -> Option<ExperimentResults> {
        if self.phase != Phase::Results {
            return None;
        }
        self.session
            .as_ref()
            .and_then(|session| ExperimentResults::from_session(session).ok())
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Explanation -> Setup.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::WrongPhase` outside the explanation screen.
    pub fn start(&mut self) -> Result<(), RunnerError> {
        self.expect_phase(Phase::Explanation)?;
        self.set_phase(Phase::Setup);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RunnerError::WrongPhase` outside setup.
    pub fn select_group(&mut self, group: GroupId) -> Result<(), RunnerError> {
        self.expect_phase(Phase::Setup)?;
        if self.selected_group != group {
            tracing::debug!(?group, "task group selected");
            self.selected_group = group;
        }
        Ok(())
    }

    pub fn set_count_input(&mut self, input: impl Into<String>) {
        self.count_input = input.into();
    }

    /// Setup -> Experiment with `count_input` items from the selected group.
    ///
    /// The raw input is kept as the field's value either way. Invalid input
    /// raises a notice and starts no session.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::InvalidCount` for input outside `1..=max_count()`,
    /// `RunnerError::ConfirmationPending` while a dialog is open and
    /// `RunnerError::WrongPhase` outside setup.
    pub fn begin_experiment(&mut self, count_input: &str) -> Result<(), RunnerError> {
        self.expect_phase(Phase::Setup)?;
        self.expect_no_confirmation()?;
        self.count_input = count_input.to_string();

        let count = match parse_count(count_input, self.max_count()) {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(input = count_input, max = err.max(), "rejected item count");
                self.confirmation = Some(ConfirmationRequest::notice(err.to_string()));
                return Err(err.into());
            }
        };

        self.start_session(self.selected_group, count)?;
        self.set_phase(Phase::Experiment);
        Ok(())
    }

    /// Score the current item and hold the answer until the feedback delay ends.
    ///
    /// The returned ticket must be handed back to [`TrialRunner::complete_feedback`].
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::FeedbackPending` while the previous answer is still
    /// on screen, `RunnerError::ConfirmationPending` while a dialog is open and
    /// `RunnerError::WrongPhase` outside the experiment.
    pub fn judge(&mut self, says_valid: bool) -> Result<FeedbackTicket, RunnerError> {
        self.expect_phase(Phase::Experiment)?;
        self.expect_no_confirmation()?;
        if self.feedback.is_some() {
            return Err(RunnerError::FeedbackPending);
        }

        let session = self.session.as_ref().ok_or(SessionError::Empty)?;
        let record = session.judge(says_valid, self.clock.now())?;
        let ticket = FeedbackTicket {
            generation: self.generation,
            trial_index: record.trial_index,
        };
        let feedback = Feedback::from_correct(record.correct);
        tracing::debug!(
            trial = ticket.trial_index,
            generation = ticket.generation,
            correct = record.correct,
            response_ms = record.response_ms,
            "trial judged"
        );

        self.feedback = Some(PendingFeedback {
            ticket,
            feedback,
            record,
        });
        Ok(ticket)
    }

    /// Apply a judgement once its feedback delay has elapsed.
    ///
    /// Tickets from a session that was since reset or discarded are ignored.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` if the session refuses the record.
    pub fn complete_feedback(
        &mut self,
        ticket: FeedbackTicket,
    ) -> Result<FeedbackResolution, RunnerError> {
        let matches = self
            .feedback
            .as_ref()
            .is_some_and(|pending| pending.ticket == ticket)
            && ticket.generation == self.generation;
        if !matches {
            tracing::warn!(
                trial = ticket.trial_index,
                generation = ticket.generation,
                current_generation = self.generation,
                "ignoring stale feedback timer"
            );
            return Ok(FeedbackResolution::Stale);
        }

        let (Some(pending), Some(session)) = (self.feedback.take(), self.session.as_mut()) else {
            return Ok(FeedbackResolution::Stale);
        };
        let finished = session.apply(pending.record, self.clock.now())?;
        if finished {
            self.set_phase(Phase::Results);
            return Ok(FeedbackResolution::Finished);
        }
        Ok(FeedbackResolution::NextTrial)
    }

    /// Ask whether to abandon the running experiment.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::WrongPhase` outside the experiment and
    /// `RunnerError::ConfirmationPending` if a dialog is already open.
    pub fn request_cancel(&mut self) -> Result<(), RunnerError> {
        self.request(ConfirmationRequest::cancel_experiment())
    }

    /// Ask whether to restart the running experiment with fresh items.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::WrongPhase` outside the experiment and
    /// `RunnerError::ConfirmationPending` if a dialog is already open.
    pub fn request_reset(&mut self) -> Result<(), RunnerError> {
        self.request(ConfirmationRequest::reset_experiment())
    }

    /// Accept the pending confirmation (or acknowledge a notice).
    ///
    /// A cancel/reset confirmed after the last trial already finished is dropped.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::NoConfirmation` when nothing is pending.
    pub fn confirm(&mut self) -> Result<ConfirmOutcome, RunnerError> {
        let request = self.confirmation.take().ok_or(RunnerError::NoConfirmation)?;
        let action = request.action;

        match action {
            ConfirmAction::Notice => Ok(ConfirmOutcome::Applied(action)),
            ConfirmAction::CancelExperiment | ConfirmAction::ResetExperiment
                if self.phase != Phase::Experiment =>
            {
                tracing::debug!(?action, phase = ?self.phase, "dropping confirmation");
                Ok(ConfirmOutcome::Dropped(action))
            }
            ConfirmAction::CancelExperiment => {
                self.discard_session();
                self.set_phase(Phase::Setup);
                Ok(ConfirmOutcome::Applied(action))
            }
            ConfirmAction::ResetExperiment => {
                let Some((group, count)) = self
                    .session
                    .as_ref()
                    .map(|session| (session.group(), session.requested_count()))
                else {
                    return Ok(ConfirmOutcome::Dropped(action));
                };
                self.start_session(group, count)?;
                tracing::info!(?group, count, "experiment reset");
                Ok(ConfirmOutcome::Applied(action))
            }
        }
    }

    /// Decline the pending confirmation, or close a notice.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::NoConfirmation` when nothing is pending.
    pub fn dismiss(&mut self) -> Result<ConfirmAction, RunnerError> {
        self.confirmation
            .take()
            .map(|request| request.action)
            .ok_or(RunnerError::NoConfirmation)
    }

    /// Results -> Setup, keeping the group but clearing the count.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::WrongPhase` outside the results screen.
    pub fn try_again(&mut self) -> Result<(), RunnerError> {
        self.expect_phase(Phase::Results)?;
        self.discard_session();
        self.count_input.clear();
        self.set_phase(Phase::Setup);
        Ok(())
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn request(&mut self, request: ConfirmationRequest) -> Result<(), RunnerError> {
        self.expect_phase(Phase::Experiment)?;
        self.expect_no_confirmation()?;
        self.confirmation = Some(request);
        Ok(())
    }

    fn start_session(&mut self, group: GroupId, count: usize) -> Result<(), RunnerError> {
        let items = self.sampler.sample(self.catalog.group(group), count)?;
        let session = ExperimentSession::new(group, items, self.clock.now())?;
        self.generation += 1;
        self.feedback = None;
        self.session = Some(session);
        tracing::info!(?group, count, generation = self.generation, "session started");
        Ok(())
    }

    fn discard_session(&mut self) {
        self.generation += 1;
        self.feedback = None;
        self.session = None;
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::info!(from = ?self.phase, to = ?phase, "phase changed");
        self.phase = phase;
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), RunnerError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RunnerError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn expect_no_confirmation(&self) -> Result<(), RunnerError> {
        if self.confirmation.is_some() {
            return Err(RunnerError::ConfirmationPending);
        }
        Ok(())
    }
}

impl Default for TrialRunner {
    fn default() -> Self {
        Self::new(
            Arc::new(Catalog::builtin()),
            Clock::default_clock(),
            RunnerConfig::default(),
        )
    }
}

impl fmt::Debug for TrialRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrialRunner")
            .field("phase", &self.phase)
            .field("selected_group", &self.selected_group)
            .field("session", &self.session)
            .field("confirmation", &self.confirmation)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

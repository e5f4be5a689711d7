use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use services::{
    ConfirmAction, ConfirmOutcome, FeedbackResolution, Phase, RunnerConfig, RunnerError,
    TrialRunner,
};
use trial_core::model::{Catalog, GroupId, TaskGroup, TaskItem};
use trial_core::time::{fixed_clock, fixed_now};

fn runner_with(catalog: Catalog, seed: u64) -> TrialRunner {
    TrialRunner::new(
        Arc::new(catalog),
        fixed_clock(),
        RunnerConfig::default().with_seed(seed),
    )
}

fn setup_runner() -> TrialRunner {
    let mut runner = runner_with(Catalog::builtin(), 5);
    runner.start().unwrap();
    runner
}

/// Judges the current item, lets the feedback delay pass and applies it.
fn answer(runner: &mut TrialRunner, correctly: bool) -> FeedbackResolution {
    let label = runner.current_item().expect("item on screen").label();
    let says_valid = label.is_valid() == correctly;
    runner.clock_mut().advance(Duration::milliseconds(700));
    let ticket = runner.judge(says_valid).unwrap();
    runner.clock_mut().advance(Duration::seconds(1));
    runner.complete_feedback(ticket).unwrap()
}

#[test]
fn bad_counts_are_rejected_with_group_max() {
    let mut runner = setup_runner();

    for (group, max) in [(GroupId::Quotes, 6), (GroupId::Concatenation, 5)] {
        runner.select_group(group).unwrap();
        let too_many = (max + 1).to_string();
        for input in ["0", "-1", "abc", too_many.as_str()] {
            let err = runner.begin_experiment(input).unwrap_err();
            assert!(matches!(err, RunnerError::InvalidCount(_)), "input {input}");
            assert_eq!(runner.phase(), Phase::Setup);
            let notice = runner.confirmation().expect("warning shown");
            assert_eq!(
                notice.message,
                format!("Please enter a valid number between 1 and {max}")
            );
            runner.dismiss().unwrap();
        }
    }
}

#[test]
fn first_scenario_item_feedback() {
    // A one-item group pins the first item of group A on screen.
    let first = TaskItem::valid(r#"X="Hello" AND "Hello"="Hello""#);
    let catalog = Catalog::new(
        TaskGroup::new("A", vec![first.clone()]).unwrap(),
        TaskGroup::new("B", vec![TaskItem::invalid("---X")]).unwrap(),
    );

    for (says_valid, expected) in [(true, "Correct"), (false, "Incorrect")] {
        let mut runner = runner_with(catalog.clone(), 1);
        runner.start().unwrap();
        runner.begin_experiment("1").unwrap();
        assert_eq!(runner.current_item(), Some(&first));

        runner.judge(says_valid).unwrap();
        let label = runner.feedback().unwrap().label();
        assert!(label.starts_with(expected), "{label}");
        assert_eq!(label.starts_with("Correct"), expected == "Correct");
    }
}

#[test]
fn full_run_reports_accuracy_and_time() {
    let mut runner = setup_runner();
    runner.begin_experiment("4").unwrap();
    let started = runner.session().unwrap().started_at();
    assert_eq!(started, fixed_now());

    let plan = [true, false, true, true];
    let mut last = FeedbackResolution::Stale;
    for (i, &correctly) in plan.iter().enumerate() {
        assert_eq!(runner.progress().unwrap().trial_number(), i + 1);
        last = answer(&mut runner, correctly);
    }

    assert_eq!(last, FeedbackResolution::Finished);
    assert_eq!(runner.phase(), Phase::Results);

    let results = runner.results().unwrap();
    assert_eq!(results.requested, 4);
    assert_eq!(results.correct, 3);
    assert_eq!(results.accuracy_percent(), 75.0);
    assert_eq!(format!("{:.2}", results.accuracy_percent()), "75.00");
    assert_eq!(results.elapsed(), Duration::milliseconds(4 * 1_700));
    assert_eq!(results.trials.len(), 4);
    assert!(results.trials.iter().all(|t| t.response_ms == 700));
}

#[test]
fn results_items_are_distinct_members_of_group() {
    let mut runner = setup_runner();
    runner.select_group(GroupId::Concatenation).unwrap();
    runner.begin_experiment("5").unwrap();

    let session = runner.session().unwrap();
    let group = runner.catalog().group(GroupId::Concatenation);
    let texts: HashSet<_> = session.items().iter().map(TaskItem::text).collect();
    assert_eq!(texts.len(), 5);
    assert!(session.items().iter().all(|item| group.tasks().contains(item)));
}

#[test]
fn reset_resamples_same_size_and_restarts_timing() {
    let mut runner = setup_runner();
    runner.select_group(GroupId::Concatenation).unwrap();
    runner.begin_experiment("3").unwrap();
    answer(&mut runner, true);
    let before = runner.generation();

    runner.clock_mut().advance(Duration::seconds(30));
    runner.request_reset().unwrap();
    assert_eq!(
        runner.confirm().unwrap(),
        ConfirmOutcome::Applied(ConfirmAction::ResetExperiment)
    );

    assert_eq!(runner.phase(), Phase::Experiment);
    let session = runner.session().unwrap();
    assert_eq!(session.requested_count(), 3);
    assert_eq!(session.group(), GroupId::Concatenation);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.correct_count(), 0);
    assert_eq!(session.started_at(), runner.clock().now());
    assert!(runner.generation() > before);
}

#[test]
fn cancel_discards_session_and_keeps_group() {
    let mut runner = setup_runner();
    runner.select_group(GroupId::Concatenation).unwrap();
    runner.begin_experiment("2").unwrap();
    answer(&mut runner, false);

    runner.request_cancel().unwrap();
    runner.confirm().unwrap();

    assert_eq!(runner.phase(), Phase::Setup);
    assert!(runner.session().is_none());
    assert!(runner.progress().is_none());
    assert!(runner.feedback().is_none());
    assert_eq!(runner.selected_group(), GroupId::Concatenation);
}

#[test]
fn feedback_timer_from_before_reset_is_ignored() {
    let mut runner = setup_runner();
    runner.begin_experiment("3").unwrap();

    let stale = runner.judge(true).unwrap();
    runner.request_reset().unwrap();
    runner.confirm().unwrap();
    assert!(runner.feedback().is_none());

    assert_eq!(
        runner.complete_feedback(stale).unwrap(),
        FeedbackResolution::Stale
    );
    let session = runner.session().unwrap();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.correct_count(), 0);

    // A judgement on the fresh session carries the same trial index but a new generation.
    let fresh = runner.judge(true).unwrap();
    assert_eq!(fresh.trial_index, stale.trial_index);
    assert_ne!(fresh.generation, stale.generation);
    assert_eq!(
        runner.complete_feedback(fresh).unwrap(),
        FeedbackResolution::NextTrial
    );
}

#[test]
fn feedback_timer_from_before_cancel_is_ignored() {
    let mut runner = setup_runner();
    runner.begin_experiment("2").unwrap();
    let stale = runner.judge(false).unwrap();
    runner.request_cancel().unwrap();
    runner.confirm().unwrap();

    // Start over with the same size; the old ticket must not leak into it.
    runner.begin_experiment("2").unwrap();
    assert_eq!(
        runner.complete_feedback(stale).unwrap(),
        FeedbackResolution::Stale
    );
    assert_eq!(runner.session().unwrap().current_index(), 0);
}

#[test]
fn try_again_clears_count_and_keeps_group() {
    let mut runner = setup_runner();
    runner.select_group(GroupId::Concatenation).unwrap();
    runner.set_count_input("1");
    runner.begin_experiment("1").unwrap();
    answer(&mut runner, true);
    assert_eq!(runner.phase(), Phase::Results);

    runner.try_again().unwrap();

    assert_eq!(runner.phase(), Phase::Setup);
    assert!(runner.session().is_none());
    assert!(runner.results().is_none());
    assert_eq!(runner.count_input(), "");
    assert_eq!(runner.selected_group(), GroupId::Concatenation);
}

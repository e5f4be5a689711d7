use chrono::Duration;
use services::TrialRunner;
use trial_core::model::{Catalog, GroupId, TaskGroup, TaskItem};

use super::test_harness::{render_with, setup_judge_harness};

fn into_setup(runner: &mut TrialRunner) {
    runner.start().unwrap();
}

fn into_experiment(runner: &mut TrialRunner) {
    runner.start().unwrap();
    runner.begin_experiment("3").unwrap();
}

fn answer_all_correctly(runner: &mut TrialRunner) {
    while let Some(item) = runner.current_item().cloned() {
        runner.clock_mut().advance(Duration::seconds(1));
        let ticket = runner.judge(item.label().is_valid()).unwrap();
        runner.complete_feedback(ticket).unwrap();
    }
}

#[tokio::test(flavor = "current_thread")]
async fn explanation_renders_welcome_and_start() {
    let html = render_with(|_| {});
    assert!(html.contains("Welcome to the Validation Experiment"), "{html}");
    assert!(html.contains("Comparison of Quotes vs. ---"), "{html}");
    assert!(html.contains("Start"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn setup_lists_groups_and_max() {
    let html = render_with(into_setup);
    assert!(html.contains("Group A (Quotes)"), "{html}");
    assert!(html.contains("Group B (--- Concatenation)"), "{html}");
    assert!(html.contains("(max 6)"), "{html}");
    assert!(html.contains("Begin Experiment"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn setup_max_follows_group() {
    let html = render_with(|runner| {
        runner.start().unwrap();
        runner.select_group(GroupId::Concatenation).unwrap();
    });
    assert!(html.contains("(max 5)"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_count_shows_warning_dialog() {
    let html = render_with(|runner| {
        runner.start().unwrap();
        let _ = runner.begin_experiment("abc");
    });
    assert!(
        html.contains("Please enter a valid number between 1 and 6"),
        "{html}"
    );
    assert!(html.contains("OK"), "{html}");
    assert!(html.contains("Begin Experiment"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn experiment_shows_progress_and_buttons() {
    let html = render_with(into_experiment);
    assert!(html.contains("Trial 1 / 3"), "{html}");
    assert!(html.contains("Not Valid"), "{html}");
    assert!(html.contains("Cancel"), "{html}");
    assert!(html.contains("Reset"), "{html}");
    assert!(!html.contains("feedback"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn experiment_shows_feedback_while_pending() {
    let html = render_with(|runner| {
        into_experiment(runner);
        let says_valid = runner.current_item().unwrap().label().is_valid();
        runner.judge(says_valid).unwrap();
    });
    assert!(html.contains("Correct!"), "{html}");
    assert!(html.contains("Trial 1 / 3"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn cancel_request_shows_yes_no_dialog() {
    let html = render_with(|runner| {
        into_experiment(runner);
        runner.request_cancel().unwrap();
    });
    assert!(
        html.contains("Are you sure you want to cancel the experiment?"),
        "{html}"
    );
    assert!(html.contains("Yes"), "{html}");
    assert!(html.contains("No"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn setup_after_cancel_has_no_progress() {
    let html = render_with(|runner| {
        into_experiment(runner);
        runner.request_cancel().unwrap();
        runner.confirm().unwrap();
    });
    assert!(html.contains("Begin Experiment"), "{html}");
    assert!(!html.contains("Trial "), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_show_time_and_accuracy() {
    let html = render_with(|runner| {
        into_experiment(runner);
        answer_all_correctly(runner);
    });
    assert!(html.contains("Results"), "{html}");
    assert!(html.contains("Time Taken: 3.00 seconds"), "{html}");
    assert!(html.contains("Accuracy: 100.00%"), "{html}");
    assert!(html.contains("(3 out of 3)"), "{html}");
    assert!(html.contains("Try Again"), "{html}");
}

fn all_valid_catalog() -> Catalog {
    let quotes = ["X=X", "Y=Y", "Z=Z"].map(TaskItem::valid).to_vec();
    Catalog::new(
        TaskGroup::new("A", quotes).unwrap(),
        TaskGroup::new("B", vec![TaskItem::invalid("---X")]).unwrap(),
    )
}

#[tokio::test(flavor = "current_thread")]
async fn judging_shows_feedback_then_advances_after_delay() {
    let mut harness = setup_judge_harness(all_valid_catalog(), into_experiment);
    harness.rebuild();
    assert!(harness.render().contains("Trial 1 / 3"));

    harness.judge(true);
    let html = harness.render();
    assert!(html.contains("Correct!"), "{html}");
    assert!(html.contains("Trial 1 / 3"), "{html}");

    // The harness runs with a 10ms feedback delay.
    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Trial 2 / 3"), "{html}");
    assert!(!html.contains("Correct!"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn second_judgement_during_feedback_is_ignored() {
    let mut harness = setup_judge_harness(all_valid_catalog(), into_experiment);
    harness.rebuild();

    harness.judge(true);
    harness.judge(false);
    assert!(harness.render().contains("Correct!"));

    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Trial 2 / 3"), "{html}");
    assert!(!html.contains("Incorrect!"), "{html}");
}

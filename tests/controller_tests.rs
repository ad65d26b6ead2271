mod common;

use common::{MockHost, step, step_with_action};
use guidepost::config::GuideConfig;
use guidepost::{GuideController, GuideError, GuideState};

#[test]
fn full_run_visits_every_step_then_completes() {
    let steps = [step(1, "a"), step(2, "b"), step(3, "c")];
    let mut host = MockHost::new(&["a", "b", "c"]);
    let mut controller = GuideController::new();

    assert_eq!(
        controller.start(&steps, &mut host).unwrap(),
        GuideState::AwaitingStep(0)
    );
    assert_eq!(
        controller.advance_from(0, &steps, &mut host),
        GuideState::AwaitingStep(1)
    );
    assert_eq!(
        controller.advance_from(1, &steps, &mut host),
        GuideState::AwaitingStep(2)
    );
    assert_eq!(
        controller.advance_from(2, &steps, &mut host),
        GuideState::Completed
    );
}

#[test]
fn activation_order_follows_sorted_order_key() {
    // Declaration order b(2), a(1): after canonical sorting the tour must
    // visit a first.
    let config = GuideConfig::from_json_str(
        r#"{"steps":[
            {"order":2,"object_name":"b","description":"B"},
            {"order":1,"object_name":"a","description":"A"}
        ]}"#,
    )
    .unwrap();
    let mut host = MockHost::new(&["a", "b"]);
    let mut controller = GuideController::new();

    let state = controller.start(&config.steps, &mut host).unwrap();
    let GuideState::AwaitingStep(i) = state else {
        panic!("expected an active step, got {state:?}");
    };
    assert_eq!(config.steps[i].object_name, "a");

    let state = controller.advance_from(i, &config.steps, &mut host);
    let GuideState::AwaitingStep(i) = state else {
        panic!("expected an active step, got {state:?}");
    };
    assert_eq!(config.steps[i].object_name, "b");
}

#[test]
fn start_on_empty_steps_fails_and_stays_idle() {
    let mut host = MockHost::new(&[]);
    let mut controller = GuideController::new();

    let err = controller.start(&[], &mut host).unwrap_err();
    assert!(matches!(err, GuideError::NoSteps));
    assert_eq!(controller.state(), GuideState::Idle);
}

#[test]
fn skip_transitions_directly_to_cancelled() {
    let steps = [step(1, "a"), step(2, "b")];
    let mut host = MockHost::new(&["a", "b"]);
    let mut controller = GuideController::new();

    controller.start(&steps, &mut host).unwrap();
    assert_eq!(controller.skip_from(0), GuideState::Cancelled);
    // Remaining steps are discarded; advance is a no-op from a terminal
    // state.
    assert_eq!(
        controller.advance_from(0, &steps, &mut host),
        GuideState::Cancelled
    );
}

#[test]
fn stale_advance_moves_cursor_by_at_most_one() {
    let steps = [step(1, "a"), step(2, "b"), step(3, "c")];
    let mut host = MockHost::new(&["a", "b", "c"]);
    let mut controller = GuideController::new();

    controller.start(&steps, &mut host).unwrap();
    // Two advances carrying the same displayed-step index, as produced by a
    // double-click processed before any re-render.
    assert_eq!(
        controller.advance_from(0, &steps, &mut host),
        GuideState::AwaitingStep(1)
    );
    assert_eq!(
        controller.advance_from(0, &steps, &mut host),
        GuideState::AwaitingStep(1)
    );
}

#[test]
fn stale_skip_is_ignored() {
    let steps = [step(1, "a"), step(2, "b")];
    let mut host = MockHost::new(&["a", "b"]);
    let mut controller = GuideController::new();

    controller.start(&steps, &mut host).unwrap();
    controller.advance_from(0, &steps, &mut host);
    assert_eq!(controller.skip_from(0), GuideState::AwaitingStep(1));
}

#[test]
fn unresolvable_step_is_skipped_over() {
    let steps = [step(1, "ghost"), step(2, "b")];
    let mut host = MockHost::new(&["b"]);
    let mut controller = GuideController::new();

    assert_eq!(
        controller.start(&steps, &mut host).unwrap(),
        GuideState::AwaitingStep(1)
    );
}

#[test]
fn sole_unresolvable_step_ends_completed() {
    let steps = [step(1, "ghost")];
    let mut host = MockHost::new(&[]);
    let mut controller = GuideController::new();

    assert_eq!(
        controller.start(&steps, &mut host).unwrap(),
        GuideState::Completed
    );
}

#[test]
fn trailing_unresolvable_steps_end_completed() {
    let steps = [step(1, "a"), step(2, "ghost"), step(3, "phantom")];
    let mut host = MockHost::new(&["a"]);
    let mut controller = GuideController::new();

    controller.start(&steps, &mut host).unwrap();
    assert_eq!(
        controller.advance_from(0, &steps, &mut host),
        GuideState::Completed
    );
}

#[test]
fn pre_actions_run_in_step_order_even_for_skipped_steps() {
    let steps = [
        step_with_action(1, "ghost", "open_panel"),
        step_with_action(2, "b", "show_settings_tab"),
    ];
    let mut host = MockHost::new(&["b"]).with_actions(&["open_panel", "show_settings_tab"]);
    let mut controller = GuideController::new();

    assert_eq!(
        controller.start(&steps, &mut host).unwrap(),
        GuideState::AwaitingStep(1)
    );
    assert_eq!(host.invoked, ["open_panel", "show_settings_tab"]);
}

#[test]
fn unknown_pre_action_does_not_block_the_step() {
    let steps = [step_with_action(1, "a", "no_such_callback")];
    let mut host = MockHost::new(&["a"]);
    let mut controller = GuideController::new();

    assert_eq!(
        controller.start(&steps, &mut host).unwrap(),
        GuideState::AwaitingStep(0)
    );
    assert_eq!(host.invoked, ["no_such_callback"]);
}

#[test]
fn controller_is_reusable_after_terminal_states() {
    let steps = [step(1, "a")];
    let mut host = MockHost::new(&["a"]);
    let mut controller = GuideController::new();

    controller.start(&steps, &mut host).unwrap();
    controller.skip_from(0);
    assert_eq!(controller.state(), GuideState::Cancelled);

    assert_eq!(
        controller.start(&steps, &mut host).unwrap(),
        GuideState::AwaitingStep(0)
    );
    assert_eq!(
        controller.advance_from(0, &steps, &mut host),
        GuideState::Completed
    );

    // And again from Completed.
    assert_eq!(
        controller.start(&steps, &mut host).unwrap(),
        GuideState::AwaitingStep(0)
    );
}

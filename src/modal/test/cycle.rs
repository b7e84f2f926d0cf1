use super::*;

/// Tests a full show and hide cycle.
///
/// Expected: exactly one enter then one leave completion
#[test]
fn full_cycle_calls_each_callback_once_in_order() {
    let mut harness = Harness::new();

    harness.show();
    harness.content_end();
    harness.hide();
    harness.content_end();

    assert_eq!(harness.calls, [Completion::Enter, Completion::Leave]);
    assert_eq!(harness.state(), ModalState::HIDDEN);
}

/// Tests several cycles in a row.
///
/// Verifies that nothing from a previous cycle leaks into the next one.
///
/// Expected: alternating enter and leave completions
#[test]
fn repeated_cycles() {
    let mut harness = Harness::new();

    for _ in 0..3 {
        assert_eq!(harness.toggle(), Toggle::Show);
        harness.content_end();
        assert_eq!(harness.toggle(), Toggle::Hide);
        harness.content_end();
    }

    assert_eq!(harness.shows(), 3);
    assert_eq!(harness.hides(), 3);
    assert!(harness
        .calls
        .chunks(2)
        .all(|pair| pair == [Completion::Enter, Completion::Leave]));
}

/// Tests hiding while the enter animation is still running.
///
/// The exit animation replaces the enter one, so a single end event
/// completes both listeners.
///
/// Expected: enter then leave completion from one event
#[test]
fn hide_during_enter_animation() {
    let mut harness = Harness::new();
    harness.show();
    harness.hide();

    harness.content_end();

    assert_eq!(harness.calls, [Completion::Enter, Completion::Leave]);
    assert_eq!(harness.state(), ModalState::HIDDEN);
}

/// Tests toggling twice before the deferred enter arming runs.
///
/// Expected: no enter listener, only the leave completion
#[test]
fn rapid_toggle_skips_enter() {
    let mut harness = Harness::new();
    harness.machine.show();
    harness.render();
    harness.machine.hide();
    harness.machine.arm_enter();

    harness.content_end();

    assert_eq!(harness.calls, [Completion::Leave]);
}

/// Tests resetting on unmount in the middle of a transition.
///
/// Expected: back to the initial state, later events ignored
#[test]
fn reset_forgets_everything() {
    let mut harness = Harness::shown();
    harness.hide();

    harness.machine.reset();
    harness.content_end();

    assert_eq!(harness.machine, ModalMachine::new());
    assert!(harness.calls.is_empty());
}

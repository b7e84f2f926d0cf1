use super::*;

/// Tests hiding a shown modal.
///
/// Verifies that the modal stays rendered while closing, then unmounts and
/// triggers `on_hide` when the content node reports the end of the exit
/// animation.
///
/// Expected: closing immediately, hidden with one leave completion afterwards
#[test]
fn hides_after_exit_animation() {
    let mut harness = Harness::shown();

    assert!(harness.hide());
    assert_eq!(
        harness.state(),
        ModalState {
            visible: true,
            closing: true
        }
    );
    assert_eq!(harness.hides(), 0);

    harness.content_end();

    assert_eq!(harness.state(), ModalState::HIDDEN);
    assert_eq!(harness.machine.phase(), Phase::Hidden);
    assert_eq!(harness.hides(), 1);
}

/// Tests hiding a modal that was never shown.
///
/// Expected: state unchanged, no leave completion
#[test]
fn hide_when_hidden_is_noop() {
    let mut harness = Harness::new();

    assert!(!harness.hide());
    harness.content_end();

    assert_eq!(harness.state(), ModalState::HIDDEN);
    assert_eq!(harness.hides(), 0);
}

/// Tests repeated hides during the exit animation.
///
/// Verifies that re-rendering while closing keeps a single leave listener so
/// `on_hide` runs once.
///
/// Expected: one leave listener, one leave completion
#[test]
fn repeated_hide_keeps_single_listener() {
    let mut harness = Harness::shown();

    harness.hide();
    assert!(!harness.hide());
    harness.render();
    harness.render();

    assert_eq!(harness.machine.listeners().len(), 1);
    harness.content_end();
    harness.content_end();
    assert_eq!(harness.hides(), 1);
}

/// Tests that the leave listener ignores events bubbled from descendants.
///
/// Expected: still closing after a descendant's animation ends
#[test]
fn leave_ignores_bubbled_events() {
    let mut harness = Harness::shown();
    harness.hide();

    harness.end(None);

    assert!(harness.state().closing);
    assert_eq!(harness.hides(), 0);
}

/// Tests hiding before the nodes have mounted.
///
/// Verifies that the leave listener is attached once the content node mounts
/// while the modal is closing.
///
/// Expected: leave completion after mount and animation end
#[test]
fn hide_before_mount_attaches_on_mount() {
    let mut harness = Harness::new();
    harness.machine.show();
    harness.machine.hide();
    assert!(harness.machine.listeners().is_empty());

    harness.render();
    harness.content_end();

    assert_eq!(harness.state(), ModalState::HIDDEN);
    assert_eq!(harness.hides(), 1);
    assert_eq!(harness.shows(), 0);
}

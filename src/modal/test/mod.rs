//! Scenario tests for the modal state machine, replaying what the component
//! does: render after each state change, arm the enter listener on the next
//! turn and feed animation end events.

use super::{Completion, ModalMachine, ModalState, Phase, Toggle, Watch};
use crate::animation::{Animation, Fade, RefName};

mod cycle;
mod hide;
#[cfg(not(feature = "web"))]
mod render;

/// Machine plus the callbacks it has triggered.
struct Harness {
    machine: ModalMachine,
    watch: Watch,
    calls: Vec<Completion>,
}

impl Harness {
    fn new() -> Self {
        let fade = Fade::default();
        Self {
            machine: ModalMachine::new(),
            watch: Watch {
                enter: fade.ref_name(false),
                leave: fade.ref_name(true),
            },
            calls: Vec::new(),
        }
    }

    /// Mounted and fully shown, with no callbacks recorded.
    fn shown() -> Self {
        let mut harness = Self::new();
        harness.show();
        harness.content_end();
        harness.calls.clear();
        harness
    }

    fn state(&self) -> ModalState {
        self.machine.state()
    }

    /// Mount the rendered nodes, as `onmounted` does after a render.
    fn render(&mut self) {
        if self.machine.state().visible {
            self.machine.node_mounted(RefName::Modal, self.watch);
            self.machine.node_mounted(RefName::Content, self.watch);
        }
    }

    /// `show` followed by the render and the deferred enter arming.
    fn show(&mut self) -> bool {
        let changed = self.machine.show();
        if changed {
            self.render();
            self.machine.arm_enter();
        }
        changed
    }

    fn hide(&mut self) -> bool {
        self.machine.hide()
    }

    fn toggle(&mut self) -> Toggle {
        let toggled = self.machine.toggle();
        if toggled == Toggle::Show {
            self.render();
            self.machine.arm_enter();
        }
        toggled
    }

    fn end(&mut self, origin: Option<RefName>) {
        let fired = self.machine.transition_end(origin);
        self.calls.extend(fired);
    }

    /// Animation end fired on the content panel itself.
    fn content_end(&mut self) {
        self.end(Some(RefName::Content));
    }

    fn shows(&self) -> usize {
        self.calls.iter().filter(|c| **c == Completion::Enter).count()
    }

    fn hides(&self) -> usize {
        self.calls.iter().filter(|c| **c == Completion::Leave).count()
    }
}

use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::{
    listener::Completion,
    machine::{ModalMachine, Toggle, Watch},
    state::{ModalState, Phase},
};
use crate::animation::RefName;

/// Imperative access to a modal: `show`, `hide` and `toggle`.
///
/// Created with [`use_modal`] in the scope that owns the modal and passed to
/// the modal component through its `handle` prop.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalHandle {
    machine: Signal<ModalMachine>,
}

pub fn use_modal() -> ModalHandle {
    ModalHandle {
        machine: use_signal(ModalMachine::new),
    }
}

impl ModalHandle {
    pub fn state(&self) -> ModalState {
        self.machine.read().state()
    }

    pub fn phase(&self) -> Phase {
        self.machine.read().phase()
    }

    pub fn is_visible(&self) -> bool {
        self.state().visible
    }

    /// Show the modal. `on_show` runs once the enter animation has finished.
    pub fn show(self) {
        let mut machine = self.machine;
        if !machine.write().show() {
            return;
        }
        // The content node only exists once this state change has rendered
        spawn(async move {
            next_turn().await;
            if let Ok(mut machine) = machine.try_write() {
                machine.arm_enter();
            }
        });
    }

    /// Start the exit animation. The modal unmounts and `on_hide` runs once it
    /// has finished.
    pub fn hide(self) {
        let mut machine = self.machine;
        machine.write().hide();
    }

    pub fn toggle(self) -> Toggle {
        if self.machine.peek().state().visible {
            self.hide();
            Toggle::Hide
        } else {
            self.show();
            Toggle::Show
        }
    }

    pub(crate) fn escape(self, keyboard: bool) {
        let mut machine = self.machine;
        machine.write().escape(keyboard);
    }

    pub(crate) fn backdrop_click(self, close_on_click: bool) {
        let mut machine = self.machine;
        machine.write().backdrop_click(close_on_click);
    }

    pub(crate) fn node_mounted(self, node: RefName, watch: Watch) {
        let mut machine = self.machine;
        machine.write().node_mounted(node, watch);
    }

    pub(crate) fn transition_end(self, origin: Option<RefName>) -> Vec<Completion> {
        let mut machine = self.machine;
        let completions = machine.write().transition_end(origin);
        if completions.is_empty() {
            tracing::trace!("Ignoring end event from {:?}", origin);
        }
        completions
    }

    /// Forget the mounted component. The owning scope may already be gone.
    pub(crate) fn release(self) {
        let mut machine = self.machine;
        if let Ok(mut machine) = machine.try_write() {
            machine.reset();
        };
    }
}

/// Resolve after the current render has been committed to the page.
async fn next_turn() {
    #[cfg(feature = "web")]
    gloo_timers::future::TimeoutFuture::new(0).await;
}

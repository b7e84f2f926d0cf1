use dioxus_logger::tracing;

use super::{
    listener::{Completion, TransitionListener},
    state::{ModalState, Phase},
};
use crate::animation::RefName;

/// Nodes a descriptor watches for the end of each phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Watch {
    pub enter: RefName,
    pub leave: RefName,
}

/// Which operation `toggle` delegated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Show,
    Hide,
}

/// Progress of the enter listener requested by `show`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum EnterRequest {
    #[default]
    Idle,
    /// `show` ran, waiting for the deferred arming.
    Requested,
    /// Armed before the watched node mounted.
    AwaitingNode,
}

/// Visibility state machine of one modal instance.
///
/// Tracks the [`ModalState`], the nodes currently mounted for the modal and
/// the one-shot listeners waiting for the end of an animation. Completions
/// returned by [`ModalMachine::transition_end`] are what drive `on_show` and
/// `on_hide`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalMachine {
    state: ModalState,
    entered: bool,
    enter: EnterRequest,
    watch: Option<Watch>,
    mounted: Vec<RefName>,
    listeners: Vec<TransitionListener>,
}

impl ModalMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            ModalState { visible: false, .. } => Phase::Hidden,
            ModalState { closing: true, .. } => Phase::Leaving,
            _ if self.entered => Phase::Shown,
            _ => Phase::Entering,
        }
    }

    pub fn listeners(&self) -> &[TransitionListener] {
        &self.listeners
    }

    /// Make the modal visible.
    ///
    /// Returns false when it already is. On true the caller must call
    /// [`ModalMachine::arm_enter`] once the new nodes have been rendered.
    pub fn show(&mut self) -> bool {
        if self.state.visible {
            return false;
        }
        self.state = ModalState {
            visible: true,
            closing: false,
        };
        self.entered = false;
        self.enter = EnterRequest::Requested;
        tracing::debug!("Modal entering");
        true
    }

    /// Attach the enter listener requested by the last `show`.
    ///
    /// Does nothing if the modal started closing in the meantime. When the
    /// watched node has not mounted yet the listener is attached by
    /// [`ModalMachine::node_mounted`] once it does.
    pub fn arm_enter(&mut self) -> bool {
        if self.enter != EnterRequest::Requested {
            return false;
        }
        if !self.state.visible || self.state.closing {
            self.enter = EnterRequest::Idle;
            return false;
        }
        match self.watch {
            Some(watch) if self.mounted.contains(&watch.enter) => {
                self.enter = EnterRequest::Idle;
                self.attach(watch.enter, Completion::Enter)
            }
            _ => {
                tracing::trace!("Enter listener waits for its node to mount");
                self.enter = EnterRequest::AwaitingNode;
                false
            }
        }
    }

    /// Start the exit animation.
    ///
    /// Returns false when the modal is hidden or already closing.
    pub fn hide(&mut self) -> bool {
        if !self.state.visible || self.state.closing {
            return false;
        }
        self.state.closing = true;
        self.enter = EnterRequest::Idle;
        tracing::debug!("Modal leaving");
        if let Some(watch) = self.watch {
            self.attach(watch.leave, Completion::Leave);
        }
        true
    }

    /// Escape was pressed. Hides only when `keyboard` dismissal is enabled.
    pub fn escape(&mut self, keyboard: bool) -> bool {
        keyboard && self.hide()
    }

    /// The backdrop was clicked. Hides only when `close_on_click` is enabled.
    pub fn backdrop_click(&mut self, close_on_click: bool) -> bool {
        close_on_click && self.hide()
    }

    pub fn toggle(&mut self) -> Toggle {
        if self.state.visible {
            self.hide();
            Toggle::Hide
        } else {
            self.show();
            Toggle::Show
        }
    }

    /// Record that `node` is in the DOM and which nodes the descriptor
    /// watches.
    pub fn node_mounted(&mut self, node: RefName, watch: Watch) {
        if !self.mounted.contains(&node) {
            self.mounted.push(node);
        }
        self.watch = Some(watch);
        if self.state.closing {
            self.attach(watch.leave, Completion::Leave);
        } else if self.enter == EnterRequest::AwaitingNode && node == watch.enter {
            self.enter = EnterRequest::Idle;
            self.attach(watch.enter, Completion::Enter);
        }
    }

    /// Subscribe to the end of the animation on `node`.
    ///
    /// Unmounted nodes are skipped silently and attaching the same
    /// subscription twice keeps a single listener.
    pub fn attach(&mut self, node: RefName, completion: Completion) -> bool {
        if !self.mounted.contains(&node) {
            tracing::trace!("Skipping {:?} listener, {} is not mounted", completion, node);
            return false;
        }
        let duplicate = self
            .listeners
            .iter()
            .any(|listener| listener.node() == node && listener.completion() == completion);
        if duplicate {
            return false;
        }
        self.listeners.push(TransitionListener::new(node, completion));
        true
    }

    /// Feed an animation or transition end event fired on `origin`.
    ///
    /// Returns the completions of every listener that fired, in the order
    /// they were attached.
    pub fn transition_end(&mut self, origin: Option<RefName>) -> Vec<Completion> {
        let fired: Vec<Completion> = self
            .listeners
            .iter_mut()
            .filter_map(|listener| listener.accept(origin))
            .collect();
        self.listeners.retain(|listener| !listener.is_spent());

        for completion in &fired {
            match completion {
                Completion::Enter => {
                    self.entered = self.state.visible;
                    tracing::debug!("Modal shown");
                }
                Completion::Leave => {
                    self.state = ModalState::HIDDEN;
                    self.entered = false;
                    self.enter = EnterRequest::Idle;
                    self.mounted.clear();
                    self.listeners.clear();
                    tracing::debug!("Modal hidden");
                }
            }
        }
        fired
    }

    /// Drop everything tied to the mounted component.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

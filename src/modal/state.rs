use serde::Serialize;

/// Visibility of one modal instance.
///
/// `closing` is only ever true while `visible` is true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ModalState {
    /// The modal subtree is rendered
    pub visible: bool,
    /// The exit animation is running
    pub closing: bool,
}

impl ModalState {
    pub const HIDDEN: ModalState = ModalState {
        visible: false,
        closing: false,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Nothing rendered
    Hidden,
    /// Rendered, enter animation not yet reported complete
    Entering,
    /// Rendered, enter animation complete
    Shown,
    /// Rendered, exit animation running
    Leaving,
}

//! Animated modal dialogs for Dioxus.
//!
//! A modal is built from an animation descriptor ([`animation::Animation`])
//! that styles the container, backdrop and content for the enter and exit
//! phases. The [`modal`] module turns any descriptor into a component and
//! sequences the phases on the end of the CSS animations.

pub mod animation;
pub mod modal;
pub mod style;

pub use animation::{Animation, Fade, RefName, Timing};
pub use modal::{use_modal, AnimatedModal, FadeModal, ModalHandle, ModalState, Phase};
pub use style::{Style, StyleOverride};

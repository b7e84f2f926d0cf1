//! The modal component and the state machine behind it.
//!
//! [`AnimatedModal`] renders a modal for any [`Animation`](crate::animation::Animation)
//! descriptor, [`FadeModal`] is the one for [`Fade`](crate::animation::Fade).
//! The owner creates a [`ModalHandle`] with [`use_modal`] and drives it with
//! `show`, `hide` and `toggle`:
//!
//! ```ignore
//! let modal = use_modal();
//! rsx! {
//!     button { onclick: move |_| modal.toggle(), "Open" }
//!     FadeModal {
//!         handle: modal,
//!         on_hide: move |_| tracing::info!("closed"),
//!         "Hello"
//!     }
//! }
//! ```

pub mod error;
pub mod factory;
pub mod handle;
pub mod keyboard;
pub mod listener;
pub mod machine;
pub mod origin;
pub mod state;
pub mod view;

#[cfg(feature = "web")]
pub mod dom;
#[cfg(not(feature = "web"))]
pub mod eval;

#[cfg(test)]
mod test;

pub use error::ListenerError;
pub use factory::{AnimatedModal, FadeModal, ModalProps};
pub use handle::{use_modal, ModalHandle};
pub use listener::{Completion, TransitionListener};
pub use machine::{ModalMachine, Toggle, Watch};
pub use state::{ModalState, Phase};

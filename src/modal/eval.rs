//! Page-wide `keydown` listener for renderers without direct DOM access,
//! installed and removed through `document::eval`.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::{
    error::ListenerError,
    keyboard::{KeyPress, KeySource},
};

static NEXT_SLOT: AtomicUsize = AtomicUsize::new(0);

/// Capturing `keydown` listener on the page's `window`.
pub struct EvalKeydown;

/// Global the listener is stored under, and the task relaying its presses.
pub struct EvalRegistration {
    slot: String,
    task: Task,
}

impl EvalKeydown {
    pub fn new() -> Result<Self, ListenerError> {
        Ok(Self)
    }
}

impl KeySource for EvalKeydown {
    type Registration = EvalRegistration;

    fn listen(
        &self,
        mut handler: Box<dyn FnMut(&KeyPress)>,
    ) -> Result<Self::Registration, ListenerError> {
        let slot = format!(
            "__animodalKeydown{}",
            NEXT_SLOT.fetch_add(1, Ordering::Relaxed)
        );
        let mut keys = document::eval(&format!(
            r#"
            window.{slot} = (e) => dioxus.send([e.key, e.keyCode]);
            window.addEventListener("keydown", window.{slot}, true);
            await new Promise(() => {{}});
            "#
        ));

        let task = spawn(async move {
            loop {
                match keys.recv::<(String, u32)>().await {
                    Ok((key, key_code)) => handler(&KeyPress::new(key, key_code)),
                    Err(err) => {
                        tracing::warn!("Escape key will not close the modal: {:?}", err);
                        break;
                    }
                }
            }
        });

        Ok(EvalRegistration { slot, task })
    }

    fn unlisten(&self, registration: Self::Registration) {
        registration.task.cancel();
        document::eval(&format!(
            r#"
            window.removeEventListener("keydown", window.{slot}, true);
            delete window.{slot};
            "#,
            slot = registration.slot
        ));
    }
}

//! Browser glue for the modal: the window keydown source and exact-origin
//! resolution of animation end events.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use super::{
    error::ListenerError,
    keyboard::{KeyPress, KeySource},
};
use crate::animation::RefName;

/// Capturing `keydown` listener on `window`.
pub struct WindowKeydown {
    window: web_sys::Window,
}

impl WindowKeydown {
    pub fn new() -> Result<Self, ListenerError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(ListenerError::NoWindow)
    }
}

impl KeySource for WindowKeydown {
    type Registration = Closure<dyn FnMut(web_sys::KeyboardEvent)>;

    fn listen(
        &self,
        mut handler: Box<dyn FnMut(&KeyPress)>,
    ) -> Result<Self::Registration, ListenerError> {
        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            handler(&KeyPress::new(event.key(), event.key_code()));
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        self.window
            .add_event_listener_with_callback_and_bool(
                "keydown",
                closure.as_ref().unchecked_ref(),
                true,
            )
            .map_err(|err| ListenerError::Rejected(format!("{:?}", err)))?;
        Ok(closure)
    }

    fn unlisten(&self, registration: Self::Registration) {
        if let Err(err) = self.window.remove_event_listener_with_callback_and_bool(
            "keydown",
            registration.as_ref().unchecked_ref(),
            true,
        ) {
            tracing::warn!("Failed to remove keydown listener: {:?}", err);
        }
    }
}

/// Elements backing the modal's named nodes.
#[derive(Clone, Default)]
pub struct MountedNodes {
    nodes: Vec<(RefName, web_sys::Element)>,
}

impl MountedNodes {
    pub fn insert(&mut self, node: RefName, evt: &MountedEvent) {
        let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
            return;
        };
        self.nodes.retain(|(name, _)| *name != node);
        self.nodes.push((node, element));
    }

    /// Named node the event was dispatched on, `None` for any other element.
    pub fn origin(&self, target: Option<web_sys::EventTarget>) -> Option<RefName> {
        let target = target?;
        let target: &JsValue = target.as_ref();
        self.nodes
            .iter()
            .find(|(_, element)| {
                let element: &JsValue = element.as_ref();
                element == target
            })
            .map(|(name, _)| *name)
    }
}

use dioxus::prelude::*;

use super::view::ModalView;
use crate::animation::RefName;

#[cfg(feature = "web")]
use super::dom::MountedNodes;

/// Works out which named node an animation or transition end event was fired
/// on, so bubbled events from the modal's children can be told apart.
///
/// In the browser the raw event target is compared with the mounted elements.
/// Elsewhere only animation events can be matched, by comparing the animation
/// name with the node's own; transition events are never attributed.
#[derive(Clone, Copy)]
pub struct Origins {
    #[cfg(not(feature = "web"))]
    view: CopyValue<Option<ModalView>>,
    #[cfg(feature = "web")]
    nodes: CopyValue<MountedNodes>,
}

pub fn use_origins() -> Origins {
    use_hook(|| Origins {
        #[cfg(not(feature = "web"))]
        view: CopyValue::new(None),
        #[cfg(feature = "web")]
        nodes: CopyValue::new(MountedNodes::default()),
    })
}

impl Origins {
    /// Track the view of the current render.
    pub fn update(self, view: &ModalView) {
        #[cfg(not(feature = "web"))]
        {
            let mut current = self.view;
            current.set(Some(view.clone()));
        }
        #[cfg(feature = "web")]
        let _ = view;
    }

    pub fn mounted(self, node: RefName, evt: &MountedEvent) {
        #[cfg(feature = "web")]
        {
            let mut nodes = self.nodes;
            nodes.write().insert(node, evt);
        }
        #[cfg(not(feature = "web"))]
        let _ = (node, evt);
    }

    #[cfg(feature = "web")]
    pub fn animation(self, _node: RefName, evt: &AnimationEvent) -> Option<RefName> {
        let target = evt
            .data()
            .downcast::<web_sys::AnimationEvent>()
            .and_then(|event| event.target());
        self.nodes.read().origin(target)
    }

    #[cfg(not(feature = "web"))]
    pub fn animation(self, node: RefName, evt: &AnimationEvent) -> Option<RefName> {
        let name = evt.animation_name();
        self.view
            .read()
            .as_ref()
            .and_then(|view| view.origin_of(node, &name))
    }

    #[cfg(feature = "web")]
    pub fn transition(self, _node: RefName, evt: &TransitionEvent) -> Option<RefName> {
        let target = evt
            .data()
            .downcast::<web_sys::TransitionEvent>()
            .and_then(|event| event.target());
        self.nodes.read().origin(target)
    }

    #[cfg(not(feature = "web"))]
    pub fn transition(self, _node: RefName, _evt: &TransitionEvent) -> Option<RefName> {
        None
    }
}

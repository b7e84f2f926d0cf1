use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use super::{
    handle::ModalHandle,
    keyboard::KeyboardGuard,
    listener::Completion,
    origin::use_origins,
    view::{ModalView, Overrides},
};
use crate::{
    animation::{Animation, Fade, RefName},
    style::StyleOverride,
};

#[cfg(feature = "web")]
use super::dom::WindowKeydown as PageKeydown;
#[cfg(not(feature = "web"))]
use super::eval::EvalKeydown as PageKeydown;

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps<A: Animation> {
    /// State owner, see [`use_modal`](super::use_modal)
    handle: ModalHandle,
    /// Descriptor driving the styles
    #[props(default)]
    animation: A,
    /// Extra classes for the outer container
    #[props(default, into)]
    class: String,
    /// Close on Escape
    #[props(default = true)]
    keyboard: bool,
    /// Render the dimmed backdrop
    #[props(default = true)]
    backdrop: bool,
    /// Close when the backdrop is clicked
    #[props(default = true)]
    close_on_click: bool,
    /// Called when the enter animation has finished
    #[props(default = None)]
    on_show: Option<EventHandler<()>>,
    /// Called when the exit animation has finished and the modal unmounted
    #[props(default = None)]
    on_hide: Option<EventHandler<()>>,
    #[props(default, into)]
    modal_style: StyleOverride,
    #[props(default, into)]
    backdrop_style: StyleOverride,
    #[props(default, into)]
    content_style: StyleOverride,
    /// Passed to the descriptor's decoration
    #[props(default, into)]
    rect_style: StyleOverride,
    children: Element,
}

/// Modal animated by the descriptor `A`.
///
/// Each descriptor type yields its own modal component; see [`FadeModal`].
#[component]
pub fn AnimatedModal<A: Animation>(props: ModalProps<A>) -> Element {
    let handle = props.handle;
    let origins = use_origins();

    // Read by the key listener when a key is pressed, not when it is installed
    let mut keyboard = use_hook(|| CopyValue::new(props.keyboard));
    keyboard.set(props.keyboard);

    use_hook(move || {
        let installed = PageKeydown::new().and_then(|source| {
            KeyboardGuard::install(source, move |key| {
                if key.is_escape() {
                    handle.escape(*keyboard.read());
                }
            })
        });
        match installed {
            Ok(guard) => Some(Rc::new(guard)),
            Err(err) => {
                tracing::warn!("Escape key will not close the modal: {}", err);
                None
            }
        }
    });

    use_drop(move || handle.release());

    let state = handle.state();
    if !state.visible {
        return rsx! {};
    }

    let view = ModalView::new(
        &props.animation,
        state.closing,
        Overrides {
            class: &props.class,
            modal: &props.modal_style,
            backdrop: &props.backdrop_style,
            content: &props.content_style,
        },
    );
    origins.update(&view);
    let watch = view.watch;
    let decoration = props.animation.decoration(state.closing, &props.rect_style);

    let on_show = props.on_show;
    let on_hide = props.on_hide;
    let complete = move |origin: Option<RefName>| {
        for completion in handle.transition_end(origin) {
            let callback = match completion {
                Completion::Enter => on_show,
                Completion::Leave => on_hide,
            };
            if let Some(callback) = callback {
                callback.call(());
            }
        }
    };
    let mounted = move |node: RefName, evt: MountedEvent| {
        origins.mounted(node, &evt);
        handle.node_mounted(node, watch);
        if node == RefName::Content {
            spawn(async move {
                if let Err(err) = evt.set_focus(true).await {
                    tracing::debug!("Could not focus modal content: {:?}", err);
                }
            });
        }
    };
    let close_on_click = props.close_on_click;

    rsx! {
        span {
            style { "{view.css}" }
            div {
                class: "{view.modal_class}",
                onmounted: move |evt| mounted(RefName::Modal, evt),
                onanimationend: move |evt| complete(origins.animation(RefName::Modal, &evt)),
                ontransitionend: move |evt| complete(origins.transition(RefName::Modal, &evt)),
                {decoration}
                div {
                    class: "{view.content_class}",
                    tabindex: "-1",
                    onmounted: move |evt| mounted(RefName::Content, evt),
                    onanimationend: move |evt| {
                        evt.stop_propagation();
                        complete(origins.animation(RefName::Content, &evt));
                    },
                    ontransitionend: move |evt| {
                        evt.stop_propagation();
                        complete(origins.transition(RefName::Content, &evt));
                    },
                    {props.children}
                }
            }
            if props.backdrop {
                div {
                    class: "{view.backdrop_class}",
                    onclick: move |_| handle.backdrop_click(close_on_click),
                }
            }
        }
    }
}

/// [`AnimatedModal`] with the [`Fade`] descriptor.
#[component]
pub fn FadeModal(props: ModalProps<Fade>) -> Element {
    AnimatedModal(props)
}

use super::machine::Watch;
use crate::{
    animation::{Animation, RefName},
    style::{ClassName, StyleOverride, StyleSheet},
};

/// Caller styling applied on top of the descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Overrides<'a> {
    pub class: &'a str,
    pub modal: &'a StyleOverride,
    pub backdrop: &'a StyleOverride,
    pub content: &'a StyleOverride,
}

/// Everything a render needs from the descriptor for one phase.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    pub modal_class: String,
    pub backdrop_class: ClassName,
    pub content_class: ClassName,
    pub watch: Watch,
    /// Rules for the classes above, injected alongside the modal
    pub css: String,
    modal_animation: Option<String>,
    content_animation: Option<String>,
}

impl ModalView {
    pub fn new<A: Animation>(animation: &A, closing: bool, overrides: Overrides<'_>) -> Self {
        let modal = overrides.modal.apply(animation.modal_style(closing));
        let backdrop = overrides.backdrop.apply(animation.backdrop_style(closing));
        let content = overrides.content.apply(animation.content_style(closing));

        let mut sheet = StyleSheet::new();
        let modal_class = match overrides.class.trim() {
            "" => sheet.insert(&modal).to_string(),
            extra => format!("{} {}", sheet.insert(&modal), extra),
        };
        let backdrop_class = sheet.insert(&backdrop);
        let content_class = sheet.insert(&content);

        Self {
            modal_class,
            backdrop_class,
            content_class,
            watch: Watch {
                enter: animation.ref_name(false),
                leave: animation.ref_name(true),
            },
            css: sheet.to_css(),
            modal_animation: modal.animation_name().map(str::to_string),
            content_animation: content.animation_name().map(str::to_string),
        }
    }

    /// Node an end event belongs to, judged by its animation name.
    ///
    /// Used where the raw DOM event is not reachable. `node` is the node whose
    /// handler received the event; a name that does not match that node's own
    /// animation means the event bubbled up from somewhere inside it.
    pub fn origin_of(&self, node: RefName, animation_name: &str) -> Option<RefName> {
        let own = match node {
            RefName::Modal => self.modal_animation.as_deref(),
            RefName::Content => self.content_animation.as_deref(),
        };
        (own == Some(animation_name)).then_some(node)
    }
}

//! Headless renders of the modal component. They need the renderer-agnostic
//! build, `cargo test --no-default-features`, since the browser key listener
//! cannot be installed outside wasm.

use dioxus::{dioxus_core::Mutation, prelude::*};

use crate::modal::{use_modal, FadeModal};

#[component]
fn Page(visible: bool, backdrop: bool) -> Element {
    let modal = use_modal();
    use_hook(move || {
        if visible {
            modal.show();
        }
    });

    rsx! {
        FadeModal {
            handle: modal,
            class: "demo-modal",
            backdrop,
            "Hello"
        }
    }
}

fn render(visible: bool, backdrop: bool) -> Vec<Mutation> {
    let mut dom = VirtualDom::new_with_props(Page, PageProps { visible, backdrop });
    dom.rebuild_to_vec().edits
}

fn listens_to(edits: &[Mutation], event: &str) -> bool {
    edits
        .iter()
        .any(|edit| matches!(edit, Mutation::NewEventListener { name, .. } if &name[..] == event))
}

fn classes(edits: &[Mutation]) -> Vec<String> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::SetAttribute {
                name: "class",
                value: AttributeValue::Text(value),
                ..
            } => Some(value.clone()),
            _ => None,
        })
        .collect()
}

/// Tests rendering a hidden modal.
///
/// Expected: no modal nodes and no listeners
#[test]
fn hidden_renders_nothing() {
    let edits = render(false, true);

    assert!(classes(&edits).is_empty());
    assert!(!listens_to(&edits, "animationend"));
    assert!(!listens_to(&edits, "click"));
}

/// Tests rendering a visible modal with the default props.
///
/// Verifies that the container carries the caller's class next to its own
/// and that the backdrop listens for clicks.
///
/// Expected: class appended, backdrop click listener present
#[test]
fn visible_renders_container_and_backdrop() {
    let edits = render(true, true);

    let classes = classes(&edits);
    assert!(classes
        .iter()
        .any(|class| class.split(' ').count() > 1 && class.ends_with("demo-modal")));
    assert!(listens_to(&edits, "animationend"));
    assert!(listens_to(&edits, "click"));
}

/// Tests rendering with `backdrop` disabled.
///
/// Expected: modal present, no backdrop node
#[test]
fn backdrop_false_omits_backdrop() {
    let with_backdrop = classes(&render(true, true));
    let edits = render(true, false);

    assert!(listens_to(&edits, "animationend"));
    assert!(!listens_to(&edits, "click"));
    assert_eq!(classes(&edits).len() + 1, with_backdrop.len());
}

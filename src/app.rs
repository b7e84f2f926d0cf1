use animodal::{use_modal, FadeModal, Style};
use dioxus::prelude::*;
use dioxus_logger::tracing;

const SITE_NAME: &str = "animodal";

#[component]
pub fn App() -> Element {
    let modal = use_modal();
    let mut shown_count = use_signal(|| 0u32);
    let mut keyboard = use_signal(|| true);

    let panel = Style::new()
        .with("padding", "24px")
        .with("border-radius", "4px");

    rsx! {
        document::Title { "{SITE_NAME}" }
        main {
            style: "font-family: sans-serif; padding: 48px",
            h1 { "{SITE_NAME}" }
            button {
                r#type: "button",
                onclick: move |_| {
                    modal.toggle();
                },
                "Toggle modal"
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: keyboard(),
                    onchange: move |evt| keyboard.set(evt.checked()),
                }
                " Close on Escape"
            }
            p { "Shown {shown_count} times" }
            FadeModal {
                handle: modal,
                class: "demo-modal",
                keyboard: keyboard(),
                content_style: panel,
                on_show: move |_| {
                    shown_count += 1;
                    tracing::info!("Modal shown");
                },
                on_hide: move |_| tracing::info!("Modal hidden"),
                h2 { "Hello" }
                p { "Press Escape or click outside to close." }
                button {
                    r#type: "button",
                    onclick: move |_| modal.hide(),
                    "Close"
                }
            }
        }
    }
}

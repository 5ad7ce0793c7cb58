use dioxus::prelude::*;

use crate::components::DialogShell;

/// Single-input dialog with Cancel and Submit.
///
/// The caller owns `open` and `value`; dismissing the dialog any way other
/// than submitting calls `on_close`.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    input_label: String,
    value: String,
    on_input: EventHandler<FormEvent>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        DialogShell { open, title, on_close,
            form {
                class: "modal-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { class: "input-label", "{input_label}" }
                input {
                    class: "input",
                    r#type: "text",
                    required: true,
                    value: value,
                    oninput: move |evt| on_input.call(evt),
                }
                div { class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "button",
                        "data-style": "secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        "data-style": "primary",
                        "Submit"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Centered panel over a dimmed backdrop, headed by `title`.
///
/// The caller owns `open`. Dismissing from the backdrop or with Escape is
/// reported through `on_close`.
#[component]
pub fn DialogShell(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot {
            class: "dialog-overlay",
            open: open,
            on_open_change: move |visible: bool| {
                if !visible {
                    on_close.call(());
                }
            },
            prim::DialogContent { class: "dialog-content".to_string(),
                prim::DialogTitle { class: "dialog-title", "{title}" }
                {children}
            }
        }
    }
}

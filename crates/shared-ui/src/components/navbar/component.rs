use dioxus::prelude::*;

/// Top bar with the application name on the left and links on the right.
#[component]
pub fn Navbar(brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            div { class: "navbar-brand", "{brand}" }
            div { class: "navbar-items", {children} }
        }
    }
}

use dioxus::prelude::*;

/// Tone of an overlay banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayTone {
    #[default]
    Success,
    Error,
}

impl OverlayTone {
    fn class(&self) -> &'static str {
        match self {
            OverlayTone::Success => "success",
            OverlayTone::Error => "error",
        }
    }
}

/// Full-screen banner announcing the outcome of an action.
///
/// Visibility is owned by the caller, which hides it again on a timer.
#[component]
pub fn Overlay(#[props(default)] tone: OverlayTone, message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "overlay", role: "status",
            div { class: "overlay-message", "data-tone": tone.class(),
                "{message}"
            }
        }
    }
}

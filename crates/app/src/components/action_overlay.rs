use dioxus::prelude::*;
use shared_types::OverlayKind;
use shared_ui::OverlayTone;

use crate::hooks::OverlaySlot;

/// Renders whatever the slot currently holds.
#[component]
pub fn ActionOverlay(slot: OverlaySlot) -> Element {
    let Some(overlay) = slot.current() else {
        return rsx! {};
    };
    let tone = match overlay.kind {
        OverlayKind::Success => OverlayTone::Success,
        OverlayKind::Error => OverlayTone::Error,
    };
    rsx! {
        shared_ui::Overlay { tone, message: overlay.message }
    }
}

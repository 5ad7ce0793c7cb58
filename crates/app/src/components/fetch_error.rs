use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

/// Error state for a failed fetch, with a Retry button.
#[component]
pub fn FetchErrorCard(error: AppError, on_retry: EventHandler<()>) -> Element {
    rsx! {
        Card { class: "fetch-error",
            CardHeader {
                CardTitle { "Could not load data" }
            }
            CardContent {
                p { class: "fetch-error-message", "{error.friendly_message()}" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

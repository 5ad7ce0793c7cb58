use std::time::Duration;

use api_client::{timing, Session};
use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest, Overlay, LOGIN_SUCCESS};
use shared_ui::{Card, CardContent, CardFooter, CardHeader, CardTitle, FormInput};

use crate::auth::{use_api_client, use_config, use_session};
use crate::components::{ActionOverlay, PublicNav};
use crate::hooks::use_overlay;
use crate::notify;
use crate::routes::Route;

/// Store the fresh token, announce success, then hold for `delay` before
/// naming the page to open.
async fn finish_login(
    session: &Session,
    token: &str,
    delay: Duration,
    announce: impl FnOnce(),
) -> Result<Route, AppError> {
    session.set(token)?;
    announce();
    timing::sleep(delay).await;
    Ok(Route::Dashboard {})
}

/// Landing page with the login form.
///
/// On success the token is stored, a confirmation overlay is shown and the
/// dashboard opens after the configured delay. A failure raises an alert in
/// the browser and an inline message elsewhere.
#[component]
pub fn Home() -> Element {
    let client = use_api_client();
    let session = use_session();
    let config = use_config();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut overlay = use_overlay();
    let redirect_delay = timing::millis(config.ui.redirect_delay_ms);

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        let session = session.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let req = LoginRequest {
                username: username(),
                password: password(),
            };
            let result = async {
                let resp = client.login(&req).await?;
                finish_login(&session, &resp.token, redirect_delay, || {
                    tracing::info!(username = %req.username, "Login succeeded");
                    loading.set(false);
                    overlay.show(Overlay::success(LOGIN_SUCCESS));
                })
                .await
            }
            .await;

            match result {
                Ok(target) => {
                    nav.push(target);
                }
                Err(e) => {
                    loading.set(false);
                    tracing::warn!(username = %req.username, error = %e, "Login failed");
                    let message = format!("Login failed: {}", e.friendly_message());
                    if !notify::alert(&message) {
                        error_msg.set(Some(message));
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        PublicNav {}

        div { class: "auth-page",
            div { class: "auth-hero",
                h1 { "Welcome to the School Management App" }
                p { "Manage your classes, teachers, and students with ease." }
            }

            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Login" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        FormInput {
                            label: "Username",
                            name: "username",
                            required: true,
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        FormInput {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "data-style": "primary",
                            disabled: loading(),
                            "Login"
                        }
                    }
                }
                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Signup {}, "Signup" }
                    }
                }
            }
        }

        ActionOverlay { slot: overlay }
    }
}

use api_client::timing;
use dioxus::prelude::*;
use shared_types::{AppError, Overlay, Role, SignupRequest, SIGNUP_ROLES, SIGNUP_SUCCESS};
use shared_ui::{Card, CardContent, CardFooter, CardHeader, CardTitle, FormInput, FormSelect};

use crate::auth::{use_api_client, use_config, use_session};
use crate::components::{ActionOverlay, PublicNav};
use crate::hooks::use_overlay;
use crate::routes::Route;

/// Account creation. Admins land on the dashboard right away; everyone else
/// is sent to the profile form after a short confirmation.
#[component]
pub fn Signup() -> Element {
    let client = use_api_client();
    let session = use_session();
    let config = use_config();
    let nav = navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student.as_str().to_string());
    let mut loading = use_signal(|| false);
    let mut overlay = use_overlay();
    let redirect_delay = timing::millis(config.ui.redirect_delay_ms);
    let overlay_duration = timing::millis(config.ui.overlay_ms);

    let handle_signup = move |evt: FormEvent| {
        let client = client.clone();
        let session = session.clone();
        async move {
            evt.prevent_default();
            loading.set(true);

            let req = SignupRequest {
                username: username(),
                password: password(),
                role: role(),
            };
            let result = async {
                let resp = client.signup(&req).await?;
                session.set(&resp.token)?;
                Ok::<_, AppError>(())
            }
            .await;
            loading.set(false);

            match result {
                Ok(()) => {
                    tracing::info!(username = %req.username, role = %req.role, "Signup succeeded");
                    overlay.show(Overlay::success(SIGNUP_SUCCESS));
                    if Role::from_claim(Some(req.role.as_str())).is_admin() {
                        nav.push(Route::Dashboard {});
                    } else {
                        timing::sleep(redirect_delay).await;
                        nav.push(Route::RecordForm {});
                    }
                }
                Err(e) => {
                    tracing::warn!(username = %req.username, error = %e, "Signup failed");
                    overlay
                        .flash(
                            Overlay::error(e.friendly_message(), overlay_duration),
                            overlay_duration,
                        )
                        .await;
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        PublicNav {}

        div { class: "auth-page",
            div { class: "auth-hero",
                h1 { "Create Your Account" }
                p { "Join our community to manage your educational experience effectively." }
            }

            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Signup" }
                }
                CardContent {
                    form { class: "auth-form", onsubmit: handle_signup,
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
                        FormSelect {
                            label: "Role",
                            value: role(),
                            onchange: move |e: FormEvent| role.set(e.value()),
                            for (option_role, label) in SIGNUP_ROLES.iter() {
                                option { value: option_role.as_str(), "{label}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "data-style": "primary",
                            disabled: loading(),
                            if loading() { "Signing You Up..." } else { "Signup" }
                        }
                    }
                }
                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Home {}, "Login" }
                    }
                }
            }
        }

        ActionOverlay { slot: overlay }
    }
}

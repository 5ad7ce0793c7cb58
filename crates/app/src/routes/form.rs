use api_client::timing;
use dioxus::prelude::*;
use shared_types::{FormValues, Overlay, RecordModel, ALL_MODELS};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormInput, FormSelect,
};

use crate::auth::{
    use_api_client, use_config, use_identity_or_redirect, use_session, user_id_of,
};
use crate::components::ActionOverlay;
use crate::hooks::use_overlay;
use crate::routes::Route;

/// Create a class, teacher or student record.
///
/// The role in the token picks the model; only admins may switch it.
#[component]
pub fn RecordForm() -> Element {
    let identity = use_identity_or_redirect(Route::Signup {});
    let client = use_api_client();
    let session = use_session();
    let config = use_config();
    let nav = navigator();

    let is_admin = identity.as_ref().is_some_and(|i| i.role.is_admin());
    let initial = identity
        .as_ref()
        .and_then(|i| RecordModel::default_for_role(&i.role));
    let user_id = user_id_of(identity.as_ref());

    let mut model = use_signal(move || initial);
    let mut overlay = use_overlay();
    let redirect_delay = timing::millis(config.ui.redirect_delay_ms);
    let overlay_duration = timing::millis(config.ui.overlay_ms);

    let submit = use_callback(move |values: FormValues| {
        let Some(selected) = model() else {
            return;
        };
        let client = client.clone();
        let token = session.token();
        let user_id = user_id.clone();

        spawn(async move {
            let result = async {
                let token = token?;
                let body = selected.build_request(&user_id?, &values);
                client.create_record(&token, selected, &body).await
            }
            .await;

            match result {
                Ok(_) => {
                    tracing::info!(model = selected.label(), "Record created");
                    overlay.show(Overlay::redirecting(selected.success_message()));
                    timing::sleep(redirect_delay).await;
                    overlay.hide();
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!(model = selected.label(), error = %e, "Record creation failed");
                    overlay
                        .flash(
                            Overlay::error(e.friendly_message(), overlay_duration),
                            overlay_duration,
                        )
                        .await;
                }
            }
        });
    });

    if identity.is_none() {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./form.css") }
        div { class: "record-page",
            Card { class: "record-card",
                CardHeader {
                    CardTitle { "School Management App Form" }
                }
                CardContent {
                    FormSelect {
                        value: model().map(|m| m.label()).unwrap_or_default(),
                        disabled: !is_admin,
                        onchange: move |e: FormEvent| model.set(RecordModel::from_label(&e.value())),
                        for option_model in ALL_MODELS {
                            option { value: option_model.label(), "{option_model.label()}" }
                        }
                    }
                    if let Some(selected) = model() {
                        DynamicForm {
                            key: "{selected.label()}",
                            model: selected,
                            on_submit: move |values| submit.call(values),
                        }
                    }
                }
            }
        }

        ActionOverlay { slot: overlay }
    }
}

/// The fields of one model, with Submit and Reset.
#[component]
fn DynamicForm(model: RecordModel, on_submit: EventHandler<FormValues>) -> Element {
    let mut values = use_signal(FormValues::new);

    rsx! {
        form {
            class: "record-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(values());
            },
            h2 { class: "record-form-title", "{model.label()} Details" }
            for field in model.fields() {
                FormInput {
                    key: "{field.key}",
                    label: field.label,
                    name: field.key,
                    input_type: field.kind.as_str(),
                    required: field.required,
                    options: field.options.iter().map(|o| o.to_string()).collect::<Vec<_>>(),
                    value: values.read().get(field.key).cloned().unwrap_or_default(),
                    on_input: move |e: FormEvent| {
                        values.write().insert(field.key.to_string(), e.value());
                    },
                }
            }
            div { class: "record-form-actions",
                button {
                    r#type: "submit",
                    class: "button",
                    "data-style": "primary",
                    "Submit"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| values.set(FormValues::new()),
                    "Reset"
                }
            }
        }
    }
}

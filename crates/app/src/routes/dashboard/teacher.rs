use dioxus::prelude::*;
use shared_types::format::{format_amount, format_locale_date};
use shared_types::table::{table_rows, RosterRow, ROSTER_HEADERS};
use shared_types::{Teacher, NOT_AVAILABLE};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, LoadingBlock, PageHeader, PageTitle, Table,
};

use super::ProfileActions;
use crate::auth::{use_identity_or_redirect, user_id_of};
use crate::components::FetchErrorCard;
use crate::hooks::{use_api, FetchState};
use crate::routes::Route;

/// The signed-in teacher's profile, assigned class and roster.
#[component]
pub fn TeacherDashboard() -> Element {
    let identity = use_identity_or_redirect(Route::Home {});
    let user_id = user_id_of(identity.as_ref());

    let mut profile = use_api(move |client, token| {
        let user_id = user_id.clone();
        async move { client.get_teacher_profile(&token, &user_id?).await }
    });

    if identity.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "dashboard",
            PageHeader {
                PageTitle { "Teacher Dashboard" }
            }
            match profile.state() {
                FetchState::Loading => rsx! { LoadingBlock {} },
                FetchState::Failed(error) => rsx! {
                    FetchErrorCard { error, on_retry: move |_| profile.restart() }
                },
                FetchState::Ready(teacher) => rsx! { TeacherProfile { teacher } },
            }
            ProfileActions {}
        }
    }
}

#[component]
fn TeacherProfile(teacher: Teacher) -> Element {
    let class_name = teacher
        .assigned_class()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let roster: Vec<RosterRow> = teacher
        .roster_names()
        .into_iter()
        .map(|name| RosterRow { name })
        .collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Profile" }
            }
            CardContent {
                dl { class: "profile-fields",
                    dt { "Name" }
                    dd { "{teacher.name}" }
                    dt { "DOB" }
                    dd { "{format_locale_date(&teacher.dob)}" }
                    dt { "Contact Details" }
                    dd { "{teacher.contact_details}" }
                    dt { "Salary" }
                    dd { "${format_amount(teacher.salary)}" }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Assigned Class: {class_name}" }
            }
            CardContent {
                if roster.is_empty() {
                    p { class: "dashboard-hint",
                        "Wait until the admin assigns you a class with students."
                    }
                } else {
                    Table { headers: ROSTER_HEADERS, rows: table_rows(&roster) }
                }
            }
        }
    }
}

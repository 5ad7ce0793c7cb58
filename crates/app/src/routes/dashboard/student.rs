use dioxus::prelude::*;
use shared_types::table::{table_row, StudentProfileRow, STUDENT_PROFILE_HEADERS};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, LoadingBlock, PageHeader, PageTitle, Table};

use super::ProfileActions;
use crate::auth::{use_identity_or_redirect, user_id_of};
use crate::components::FetchErrorCard;
use crate::hooks::{use_api, FetchState};
use crate::routes::Route;

/// The signed-in student's own profile as a one-row table.
#[component]
pub fn StudentDashboard() -> Element {
    let identity = use_identity_or_redirect(Route::Home {});
    let user_id = user_id_of(identity.as_ref());

    let mut profile = use_api(move |client, token| {
        let user_id = user_id.clone();
        async move { client.get_student_profile(&token, &user_id?).await }
    });

    if identity.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "dashboard",
            PageHeader {
                PageTitle { "Student Dashboard" }
            }
            Card {
                CardHeader {
                    CardTitle { "Profile" }
                }
                CardContent {
                    match profile.state() {
                        FetchState::Loading => rsx! { LoadingBlock {} },
                        FetchState::Failed(error) => rsx! {
                            FetchErrorCard { error, on_retry: move |_| profile.restart() }
                        },
                        FetchState::Ready(student) => rsx! {
                            Table {
                                headers: STUDENT_PROFILE_HEADERS,
                                rows: vec![table_row(&StudentProfileRow::from(&student))],
                            }
                        },
                    }
                }
            }
            ProfileActions {}
        }
    }
}

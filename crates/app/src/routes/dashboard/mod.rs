pub mod admin;
pub mod student;
pub mod teacher;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdPencil};
use dioxus_free_icons::Icon;
use shared_types::DashboardView;
use shared_ui::{Button, ButtonVariant, LoadingBlock};

use crate::auth::{logout, use_session};
use crate::routes::Route;

/// Role-adaptive dashboard: renders the dashboard for the role in the token.
///
/// Without a usable token the visitor is sent to the signup page.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = navigator();
    let mut view = use_signal(DashboardView::default);

    use_effect(move || match session.identity() {
        Ok(identity) => {
            let next = DashboardView::for_identity(&identity);
            tracing::debug!(?next, role = identity.role.as_str(), "Dashboard resolved");
            view.set(next);
        }
        Err(e) => {
            tracing::warn!(error = %e, "No usable session, redirecting to signup");
            nav.push(Route::Signup {});
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        match view() {
            DashboardView::Loading => rsx! { LoadingBlock {} },
            DashboardView::Student => rsx! { student::StudentDashboard {} },
            DashboardView::Teacher => rsx! { teacher::TeacherDashboard {} },
            DashboardView::Admin => rsx! { admin::AdminDashboard {} },
            DashboardView::Unauthorized => rsx! {
                div { class: "dashboard-unauthorized",
                    h1 { "Unauthorized access" }
                }
            },
        }
    }
}

/// Edit Profile and Logout, shared by the student and teacher dashboards.
#[component]
fn ProfileActions() -> Element {
    let session = use_session();
    let nav = navigator();

    rsx! {
        div { class: "dashboard-actions",
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| {
                    nav.push(Route::RecordForm {});
                },
                Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                "Edit Profile"
            }
            Button {
                variant: ButtonVariant::Destructive,
                onclick: move |_| logout(&session),
                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                "Logout"
            }
        }
    }
}

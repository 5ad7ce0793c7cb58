use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::format::format_amount;
use shared_types::{AdminOverview, Class};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, LoadingBlock,
    PageActions, PageHeader, PageTitle, StatCard,
};

use crate::auth::{logout, use_api_client, use_identity_or_redirect, use_session};
use crate::components::FetchErrorCard;
use crate::hooks::{use_api, FetchState};
use crate::notify;
use crate::routes::Route;

/// Classes overview with delete, plus salary and fee totals.
#[component]
pub fn AdminDashboard() -> Element {
    let identity = use_identity_or_redirect(Route::Home {});
    let client = use_api_client();
    let session = use_session();
    let logout_session = session.clone();
    let nav = navigator();

    let mut overview = use_api(|client, token| async move {
        client.load_admin_overview(&token).await
    });

    let delete_class = use_callback(move |class_id: String| {
        let client = client.clone();
        let token = session.token();
        spawn(async move {
            let mut listed = overview;
            let result = match token {
                Ok(token) => client.delete_listed_class(&token, &class_id, &mut listed).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    notify::alert("Class deleted successfully");
                }
                Err(e) => tracing::error!(error = %e, class_id = %class_id, "Failed to delete class"),
            }
        });
    });

    if identity.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "dashboard",
            PageHeader {
                PageTitle { "Admin Dashboard" }
                PageActions {
                    Button {
                        onclick: move |_| {
                            nav.push(Route::RecordForm {});
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Create a Class"
                    }
                }
            }

            match overview.state() {
                FetchState::Loading => rsx! { LoadingBlock {} },
                FetchState::Failed(error) => rsx! {
                    FetchErrorCard { error, on_retry: move |_| overview.restart() }
                },
                FetchState::Ready(data) => rsx! {
                    AdminOverviewPanel { data, on_delete: delete_class }
                },
            }

            div { class: "dashboard-actions",
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| logout(&logout_session),
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Logout"
                }
            }
        }
    }
}

#[component]
fn AdminOverviewPanel(data: AdminOverview, on_delete: EventHandler<String>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Classes Overview" }
            }
            CardContent {
                if data.classes.is_empty() {
                    DataTableEmpty { message: "No classes available" }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Class Name" }
                            DataTableColumn { "Year" }
                            DataTableColumn { "Teacher" }
                            DataTableColumn { "No. of Students" }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            for class in data.classes.iter() {
                                ClassRow { key: "{class.id}", class: class.clone(), on_delete }
                            }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Financial Overview" }
            }
            CardContent {
                div { class: "stat-row",
                    StatCard {
                        label: "Total Teacher Salary",
                        value: format_amount(data.total_teacher_salary),
                    }
                    StatCard {
                        label: "Total Fees Received",
                        value: format_amount(data.total_fees_received),
                    }
                }
            }
        }
    }
}

/// One class. Clicking the row opens its analytics; Delete does not.
#[component]
fn ClassRow(class: Class, on_delete: EventHandler<String>) -> Element {
    let nav = navigator();
    let analytics = Route::Analytics {
        class_id: class.id.clone(),
    };
    let class_id = class.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| {
                nav.push(analytics.clone());
            },
            DataTableCell { "{class.name}" }
            DataTableCell { "{class.year}" }
            DataTableCell { "{class.teacher_name()}" }
            DataTableCell { "{class.student_count()}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(class_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

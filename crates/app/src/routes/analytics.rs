use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdUserPlus};
use dioxus_free_icons::Icon;
use shared_types::format::format_amount;
use shared_types::table::{table_rows, ClassMemberRow, CLASS_MEMBER_HEADERS};
use shared_types::{AppError, ClassAnalytics, GENDER_LABELS};
use shared_ui::{
    BarChart, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, LoadingBlock,
    Modal, PageActions, PageHeader, PageTitle, Table,
};

use crate::auth::{use_api_client, use_identity_or_redirect, use_session};
use crate::components::FetchErrorCard;
use crate::hooks::{use_api, ApiResource, FetchState};
use crate::routes::Route;

/// Per-class analytics. A different class id mounts a fresh view.
///
/// Without a usable session nothing is fetched and the visitor is sent to
/// signup.
#[component]
pub fn Analytics(class_id: String) -> Element {
    if use_identity_or_redirect(Route::Signup {}).is_none() {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./analytics.css") }
        ClassAnalyticsView { key: "{class_id}", class_id }
    }
}

/// Which membership change a modal submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assignment {
    Student,
    Teacher,
}

#[component]
fn ClassAnalyticsView(class_id: String) -> Element {
    let client = use_api_client();
    let session = use_session();
    let nav = navigator();

    let fetch_id = class_id.clone();
    let mut analytics = use_api(move |client, token| {
        let class_id = fetch_id.clone();
        async move { client.load_class_analytics(&token, &class_id).await }
    });

    let mut open = use_signal(|| Option::<Assignment>::None);
    let mut student_id = use_signal(String::new);
    let mut teacher_id = use_signal(String::new);

    let submit = use_callback(move |assignment: Assignment| {
        let client = client.clone();
        let token = session.token();
        let class_id = class_id.clone();
        let class_name = match analytics.state() {
            FetchState::Ready(data) => data.class.name,
            _ => String::new(),
        };
        let target = match assignment {
            Assignment::Student => student_id(),
            Assignment::Teacher => teacher_id(),
        };
        student_id.set(String::new());
        teacher_id.set(String::new());
        open.set(None);

        spawn(async move {
            let result = async {
                let token = token?;
                match assignment {
                    Assignment::Student => client.assign_student(&token, &class_id, &target).await,
                    Assignment::Teacher => client.assign_class(&token, &target, &class_name).await,
                }
            }
            .await;
            after_assignment(assignment, result, analytics);
        });
    });

    rsx! {
        div { class: "analytics",
            PageHeader {
                PageActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            nav.push(Route::Dashboard {});
                        },
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Go Back"
                    }
                }
            }

            match analytics.state() {
                FetchState::Loading => rsx! { LoadingBlock {} },
                FetchState::Failed(error) => rsx! {
                    FetchErrorCard { error, on_retry: move |_| analytics.restart() }
                },
                FetchState::Ready(data) => rsx! {
                    AnalyticsReport { data }
                    div { class: "analytics-actions",
                        Button {
                            onclick: move |_| open.set(Some(Assignment::Student)),
                            Icon::<LdUserPlus> { icon: LdUserPlus, width: 16, height: 16 }
                            "Add Student"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| open.set(Some(Assignment::Teacher)),
                            "Assign Teacher"
                        }
                    }
                },
            }

            Modal {
                open: open() == Some(Assignment::Student),
                title: "Add Student to Class",
                input_label: "Enter Student ID:",
                value: student_id(),
                on_input: move |e: FormEvent| student_id.set(e.value()),
                on_submit: move |_| submit.call(Assignment::Student),
                on_close: move |_| open.set(None),
            }
            Modal {
                open: open() == Some(Assignment::Teacher),
                title: "Assign Teacher to Class",
                input_label: "Enter Teacher ID:",
                value: teacher_id(),
                on_input: move |e: FormEvent| teacher_id.set(e.value()),
                on_submit: move |_| submit.call(Assignment::Teacher),
                on_close: move |_| open.set(None),
            }
        }
    }
}

/// Reload on success. Failures are only logged.
fn after_assignment(
    assignment: Assignment,
    result: Result<(), AppError>,
    mut analytics: ApiResource<ClassAnalytics>,
) {
    match result {
        Ok(()) => {
            tracing::info!(?assignment, "Class membership updated");
            analytics.restart();
        }
        Err(e) => tracing::error!(error = %e, ?assignment, "Class membership update failed"),
    }
}

#[component]
fn AnalyticsReport(data: ClassAnalytics) -> Element {
    let labels: Vec<String> = GENDER_LABELS.iter().map(|l| l.to_string()).collect();
    let values = data.gender_series().to_vec();
    let members: Vec<ClassMemberRow> = data.students.iter().map(ClassMemberRow::from).collect();

    rsx! {
        PageTitle { "{data.class.name} - Analytics" }

        Card {
            CardContent {
                BarChart { title: "Number of Students", labels, values }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Class Details" }
            }
            CardContent {
                dl { class: "analytics-details",
                    dt { "Year" }
                    dd { "{data.class.year}" }
                    dt { "Teacher" }
                    dd { "{data.teacher_name()}" }
                    dt { "Total Students" }
                    dd { "{data.total_students()}" }
                    dt { "Total Revenue" }
                    dd { "{format_amount(data.total_revenue)} INR" }
                }
                h3 { class: "analytics-subheading", "Students List:" }
                Table { headers: CLASS_MEMBER_HEADERS, rows: table_rows(&members) }
            }
        }
    }
}

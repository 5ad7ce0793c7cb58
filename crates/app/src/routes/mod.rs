pub mod analytics;
pub mod dashboard;
pub mod form;
pub mod home;
pub mod not_found;
pub mod signup;

use dioxus::prelude::*;

use analytics::Analytics;
use dashboard::Dashboard;
use form::RecordForm;
use home::Home;
use not_found::NotFound;
use signup::Signup;

/// Application routes. Views check the session themselves.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/form")]
    RecordForm {},
    #[route("/analytics/:class_id")]
    Analytics { class_id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "app-shell",
            Outlet::<Route> {}
        }
    }
}

use api_client::{ApiClient, Session};
use dioxus::prelude::*;
use shared_types::ClientConfig;

mod auth;
mod components;
mod config;
mod hooks;
pub mod notify;
mod routes;
use routes::Route;


const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let loaded = config::load();

    if let Err(e) = dioxus::logger::init(config::log_level(&loaded.config)) {
        eprintln!("[startup] Failed to initialise logging: {e}");
    }
    if let Some(warning) = &loaded.warning {
        tracing::warn!(error = %warning, "config.toml is invalid, using defaults");
    }
    tracing::info!(
        base_url = %loaded.config.api.base_url,
        platform = client_platform(),
        "Starting school client"
    );

    dioxus::LaunchBuilder::new()
        .with_context(loaded.config)
        .launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<ClientConfig>();

    let storage_key = config.session.storage_key.clone();
    use_context_provider(move || Session::persistent(&storage_key));

    let base_url = config.api.base_url.clone();
    use_context_provider(move || ApiClient::new(base_url));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

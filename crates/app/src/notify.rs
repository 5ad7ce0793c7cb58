const APP_NAME: &str = "School Management App";

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "Failed to show desktop notification");
        }
    }
}

/// Show a blocking alert in the browser.
///
/// Returns `false` where no alert box exists; the caller then shows the
/// message inline. Desktop builds also raise a notification.
#[allow(unused_variables)]
pub fn alert(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.alert_with_message(message).is_ok();
        }
    }
    send(APP_NAME, message);
    false
}

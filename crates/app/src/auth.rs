use api_client::{ApiClient, Session};
use dioxus::prelude::*;
use shared_types::{AppError, ClientConfig, Identity};

use crate::routes::Route;

/// Hook to access the session token store.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Hook to access the API client.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Hook to access the client configuration.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Resolve the identity once, when the calling component mounts.
///
/// Without a usable session this navigates to `fallback` after the first
/// render and returns `None`.
pub fn use_identity_or_redirect(fallback: Route) -> Option<Identity> {
    let session = use_session();
    let identity = use_hook(move || session.identity());

    let failure = identity.as_ref().err().cloned();
    use_effect(move || {
        if let Some(e) = &failure {
            tracing::warn!(error = %e, "No usable session, redirecting");
            navigator().push(fallback.clone());
        }
    });

    identity.ok()
}

/// The `userId` claim of a resolved identity, or why there is none.
pub fn user_id_of(identity: Option<&Identity>) -> Result<String, AppError> {
    identity
        .ok_or_else(AppError::no_session)
        .and_then(|i| i.require_user_id().map(str::to_string))
}

/// Forget the token and return to the login page.
pub fn logout(session: &Session) {
    if let Err(e) = session.clear() {
        tracing::error!(error = %e, "Failed to clear session");
    }
    navigator().push(Route::Home {});
}

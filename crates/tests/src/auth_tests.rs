use api_client::Session;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, Role, SignupRequest, SIGNUP_FALLBACK_ERROR};

use crate::common;

fn login(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_stores_token() {
    let api = common::test_api().await;
    let session = Session::in_memory();

    let resp = api.client.login(&login("asha", "pw")).await.unwrap();
    session.set(&resp.token).unwrap();

    assert_eq!(session.get().as_deref(), Some("abc"));
    let sent = api.log.find("POST", "/api/auth/login").unwrap();
    assert_eq!(sent.bearer, None);
    assert_eq!(sent.body.unwrap()["username"], "asha");
}

#[tokio::test]
async fn test_login_failure_uses_err_field() {
    let api = common::test_api().await;
    let err = api.client.login(&login("asha", "wrong")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.status, Some(400));
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(err.friendly_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_failed_login_leaves_session_untouched() {
    let api = common::test_api().await;
    let session = Session::in_memory();
    session.set("previous").unwrap();

    if let Ok(resp) = api.client.login(&login("nobody", "pw")).await {
        session.set(&resp.token).unwrap();
    }
    assert_eq!(session.get().as_deref(), Some("previous"));
}

#[tokio::test]
async fn test_signup_token_resolves_to_chosen_role() {
    let api = common::test_api().await;
    let session = Session::in_memory();
    let req = SignupRequest {
        username: "ravi".into(),
        password: "pw".into(),
        role: "teacher".into(),
    };

    let resp = api.client.signup(&req).await.unwrap();
    session.set(&resp.token).unwrap();

    let identity = session.identity().unwrap();
    assert_eq!(identity.role, Role::Teacher);
    assert_eq!(identity.user_id.as_deref(), Some("u-new"));
}

#[tokio::test]
async fn test_signup_failure_uses_error_field() {
    let api = common::test_api().await;
    let req = SignupRequest {
        username: "taken".into(),
        password: "pw".into(),
        role: "student".into(),
    };
    let err = api.client.signup(&req).await.unwrap_err();
    assert_eq!(err.message, "Username already exists");
    assert_ne!(err.message, SIGNUP_FALLBACK_ERROR);
}

#[tokio::test]
async fn test_protected_call_without_bearer_is_unauthorized() {
    let api = common::test_api().await;
    // The mock treats an empty bearer value as no credentials at all.
    let err = api.client.list_classes("").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "No token provided");
}

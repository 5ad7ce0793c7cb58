use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// No token in the session store.
    NoSession,
    /// A token is present but its payload cannot be decoded.
    InvalidToken,
    Unauthorized,
    Forbidden,
    NotFound,
    BadRequest,
    /// Any other non-2xx response from the remote API.
    Api,
    /// The request never produced a response.
    Network,
    /// The response body was not the expected JSON shape.
    Decode,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NoSession => write!(f, "NoSession"),
            AppErrorKind::InvalidToken => write!(f, "InvalidToken"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::Api => write!(f, "Api"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error used by the API client and every view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status of the failed response, when there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Keys the remote API uses for the human-readable part of an error body,
/// in lookup order.
const ERROR_BODY_KEYS: [&str; 3] = ["err", "error", "message"];

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn no_session() -> Self {
        Self::new(AppErrorKind::NoSession, "No token found")
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InvalidToken, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Build an error from a non-2xx response.
    ///
    /// The message is taken from the first of `err`, `error`, `message` found
    /// in a JSON body; otherwise `fallback` is used.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let kind = match status {
            400 | 422 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            500..=599 => AppErrorKind::InternalError,
            _ => AppErrorKind::Api,
        };
        let message = Self::body_message(body).unwrap_or_else(|| fallback.to_string());
        Self {
            kind,
            message,
            status: Some(status),
        }
    }

    /// Extract the error text from a JSON error body such as `{"err": "..."}`.
    pub fn body_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;
        ERROR_BODY_KEYS.iter().find_map(|key| {
            object
                .get(*key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
    }

    /// True for the two kinds that mean "treat the visitor as signed out".
    pub fn is_session_error(&self) -> bool {
        matches!(
            self.kind,
            AppErrorKind::NoSession | AppErrorKind::InvalidToken
        )
    }

    /// Message suitable for direct display in the UI.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => "Unable to reach the server. Please try again.".to_string(),
            AppErrorKind::Decode => "The server sent an unexpected response.".to_string(),
            _ if self.message.is_empty() => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({}): {}", self.kind, status, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for AppError {}

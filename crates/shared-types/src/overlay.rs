use std::time::Duration;

/// Tone of a full-screen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Success,
    Error,
}

/// A timed banner announcing the outcome of an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub message: String,
}

impl Overlay {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OverlayKind::Success,
            message: message.into(),
        }
    }

    /// Error overlays tell the visitor they will go away on their own after
    /// `shown_for`.
    pub fn error(message: impl AsRef<str>, shown_for: Duration) -> Self {
        Self {
            kind: OverlayKind::Error,
            message: format!(
                "{} (disappearing in {})",
                message.as_ref(),
                seconds_label(shown_for)
            ),
        }
    }

    /// Success overlay that precedes a navigation.
    pub fn redirecting(message: impl AsRef<str>) -> Self {
        Self::success(format!("{} Redirecting...", message.as_ref()))
    }
}

/// "3 seconds", "1 second", "1.5 seconds".
fn seconds_label(duration: Duration) -> String {
    let millis = duration.as_millis();
    let amount = if millis % 1000 == 0 {
        (millis / 1000).to_string()
    } else {
        format!("{:.1}", duration.as_secs_f64())
    };
    let unit = if millis == 1000 { "second" } else { "seconds" };
    format!("{amount} {unit}")
}

pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting to dashboard...";
pub const SIGNUP_SUCCESS: &str = "Signup successful! Redirecting...";
pub const SIGNUP_FALLBACK_ERROR: &str = "An unexpected error occurred.";
pub const CREATE_FALLBACK_ERROR: &str = "Network response was not ok";

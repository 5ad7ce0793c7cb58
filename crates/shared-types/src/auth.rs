use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Lenient base64url engine for JWT segments: padding optional, trailing
/// bits tolerated.
const JWT_SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Role claimed by the session token.
///
/// Only used to pick which view to render. The remote API enforces the real
/// authorization on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Teacher,
    Admin,
    /// Any other claim value, a non-string value, or no claim at all.
    Unrecognized(Option<String>),
}

impl Role {
    /// Parse the `role` claim. Matching is exact, as the API issues
    /// lowercase role names.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("student") => Role::Student,
            Some("teacher") => Role::Teacher,
            Some("admin") => Role::Admin,
            other => Role::Unrecognized(other.map(str::to_string)),
        }
    }

    /// Lowercase name as sent in signup requests.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::Unrecognized(Some(raw)) => raw,
            Role::Unrecognized(None) => "",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Roles a visitor may pick on the signup form, in display order.
pub const SIGNUP_ROLES: [(Role, &str); 3] = [
    (Role::Student, "Student"),
    (Role::Teacher, "Teacher"),
    (Role::Admin, "Admin"),
];

/// Why a token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token has no second `.`-separated segment.
    MissingPayload,
    /// The payload segment is not valid base64url.
    InvalidBase64(String),
    /// The decoded payload is not UTF-8 JSON.
    InvalidJson(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::MissingPayload => write!(f, "Invalid token specified: missing part #2"),
            TokenError::InvalidBase64(e) => {
                write!(f, "Invalid token specified: invalid base64 for part #2 ({e})")
            }
            TokenError::InvalidJson(e) => {
                write!(f, "Invalid token specified: invalid json for part #2 ({e})")
            }
        }
    }
}

impl std::error::Error for TokenError {}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::invalid_token(err.to_string())
    }
}

/// Claims the client reads from a token payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Claims {
    pub role: Option<String>,
    pub user_id: Option<String>,
}

/// Decode the payload of a JWT without verifying its signature.
///
/// Any valid JSON payload is accepted. Claims that are missing or of an
/// unexpected type come back as `None`.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    let normalized: String = payload
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = JWT_SEGMENT
        .decode(normalized.as_bytes())
        .map_err(|e| TokenError::InvalidBase64(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::InvalidJson(e.to_string()))?;

    let role = value.get("role").and_then(|v| v.as_str()).map(str::to_string);
    let user_id = value.get("userId").and_then(|v| match v {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    Ok(Claims { role, user_id })
}

/// Identity derived from the session token. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub role: Role,
    pub user_id: Option<String>,
}

impl Identity {
    /// The `userId` claim, or an error when the token does not carry one.
    pub fn require_user_id(&self) -> Result<&str, AppError> {
        self.user_id
            .as_deref()
            .ok_or_else(|| AppError::invalid_token("Token has no userId claim"))
    }
}

/// Resolve the current identity from an optional raw token.
///
/// Both an absent token and an undecodable one mean "no session"; the caller
/// redirects instead of rendering protected content.
pub fn resolve_identity(token: Option<&str>) -> Result<Identity, AppError> {
    let token = token.ok_or_else(AppError::no_session)?;
    let claims = decode_claims(token)?;
    Ok(Identity {
        role: Role::from_claim(claims.role.as_deref()),
        user_id: claims.user_id,
    })
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Default for SignupRequest {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: Role::Student.as_str().to_string(),
        }
    }
}

/// Successful login/signup response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

//! Authentication endpoints: register, login, and profile fetch.
//!
//! These return the raw backend outcome; persisting the token and identity
//! is the session store's job (`crate::session`).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Credentials, Registration, User};

/// Token and identity issued by a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub token: String,
    pub user: User,
}

#[derive(serde::Deserialize)]
struct AuthEnvelope {
    token: String,
    user: User,
}

#[derive(serde::Deserialize)]
struct UserEnvelope {
    user: User,
}

/// Collapse transport-level failures into an authentication error, keeping
/// the backend's message when it sent one. Failed login and register must
/// always surface as `Authentication` to the caller.
fn auth_failure(err: ApiError) -> ApiError {
    match err {
        ApiError::Request { message, .. } => ApiError::Authentication(message),
        ApiError::Connection | ApiError::ResponseParse => {
            ApiError::Authentication(ApiError::Connection.to_string())
        }
        other => other,
    }
}

/// `POST /auth/login`.
pub async fn login(credentials: &Credentials) -> Result<AuthOutcome, ApiError> {
    let body = serde_json::to_value(credentials).map_err(|_| ApiError::ResponseParse)?;
    let envelope: AuthEnvelope = http::request(Method::Post, "/auth/login", None, Some(body))
        .await
        .map_err(auth_failure)?;
    Ok(AuthOutcome {
        token: envelope.token,
        user: envelope.user,
    })
}

/// `POST /auth/register`.
pub async fn register(registration: &Registration) -> Result<AuthOutcome, ApiError> {
    let body = serde_json::to_value(registration).map_err(|_| ApiError::ResponseParse)?;
    let envelope: AuthEnvelope = http::request(Method::Post, "/auth/register", None, Some(body))
        .await
        .map_err(auth_failure)?;
    Ok(AuthOutcome {
        token: envelope.token,
        user: envelope.user,
    })
}

/// `GET /api/profile` — the authoritative identity for the stored token.
pub async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    let envelope: UserEnvelope =
        http::request(Method::Get, "/api/profile", Some(token), None).await?;
    Ok(envelope.user)
}

//! User directory and role management service wrappers.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Role, User};
use crate::session::{SessionStorage, SessionStore};

#[derive(serde::Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(serde::Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

/// `GET /api/users` (manager only, enforced server-side).
pub async fn list<S: SessionStorage>(session: &SessionStore<S>) -> Result<Vec<User>, ApiError> {
    let token = session.authorized()?;
    let envelope: UsersEnvelope =
        http::request(Method::Get, "/api/users", Some(&token), None).await?;
    Ok(envelope.users)
}

/// `GET /api/users/engineers` — assignable users for defect forms.
pub async fn engineers<S: SessionStorage>(
    session: &SessionStore<S>,
) -> Result<Vec<User>, ApiError> {
    let token = session.authorized()?;
    let envelope: UsersEnvelope =
        http::request(Method::Get, "/api/users/engineers", Some(&token), None).await?;
    Ok(envelope.users)
}

/// `PUT /api/users/:id/role` (manager only, enforced server-side).
pub async fn update_role<S: SessionStorage>(
    session: &SessionStore<S>,
    user_id: i64,
    role: Role,
) -> Result<User, ApiError> {
    let token = session.authorized()?;
    let envelope: UserEnvelope = http::request(
        Method::Put,
        &format!("/api/users/{user_id}/role"),
        Some(&token),
        Some(role_body(role)),
    )
    .await?;
    Ok(envelope.user)
}

fn role_body(role: Role) -> serde_json::Value {
    serde_json::json!({ "role": role })
}

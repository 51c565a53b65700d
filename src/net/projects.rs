//! Project CRUD service wrappers.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Project, ProjectCreate, ProjectUpdate};
use crate::session::{SessionStorage, SessionStore};

#[derive(serde::Deserialize)]
struct ProjectEnvelope {
    project: Project,
}

#[derive(serde::Deserialize)]
struct ProjectsEnvelope {
    projects: Vec<Project>,
}

/// `GET /api/projects` — every project visible to the caller.
pub async fn list<S: SessionStorage>(
    session: &SessionStore<S>,
) -> Result<Vec<Project>, ApiError> {
    let token = session.authorized()?;
    let envelope: ProjectsEnvelope =
        http::request(Method::Get, "/api/projects", Some(&token), None).await?;
    Ok(envelope.projects)
}

/// `GET /api/projects/:id`.
pub async fn get<S: SessionStorage>(
    session: &SessionStore<S>,
    id: i64,
) -> Result<Project, ApiError> {
    let token = session.authorized()?;
    let envelope: ProjectEnvelope =
        http::request(Method::Get, &format!("/api/projects/{id}"), Some(&token), None).await?;
    Ok(envelope.project)
}

/// `POST /api/projects` (manager only, enforced server-side).
pub async fn create<S: SessionStorage>(
    session: &SessionStore<S>,
    payload: &ProjectCreate,
) -> Result<Project, ApiError> {
    let token = session.authorized()?;
    let body = serde_json::to_value(payload).map_err(|_| ApiError::ResponseParse)?;
    let envelope: ProjectEnvelope =
        http::request(Method::Post, "/api/projects", Some(&token), Some(body)).await?;
    Ok(envelope.project)
}

/// `PUT /api/projects/:id`.
pub async fn update<S: SessionStorage>(
    session: &SessionStore<S>,
    id: i64,
    payload: &ProjectUpdate,
) -> Result<Project, ApiError> {
    let token = session.authorized()?;
    let body = serde_json::to_value(payload).map_err(|_| ApiError::ResponseParse)?;
    let envelope: ProjectEnvelope = http::request(
        Method::Put,
        &format!("/api/projects/{id}"),
        Some(&token),
        Some(body),
    )
    .await?;
    Ok(envelope.project)
}

/// `DELETE /api/projects/:id`.
pub async fn delete<S: SessionStorage>(
    session: &SessionStore<S>,
    id: i64,
) -> Result<(), ApiError> {
    let token = session.authorized()?;
    http::request_empty(Method::Delete, &format!("/api/projects/{id}"), Some(&token)).await
}

//! Defect CRUD service wrappers and project statistics.

#[cfg(test)]
#[path = "defects_test.rs"]
mod defects_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Defect, DefectCreate, DefectStats, DefectUpdate};
use crate::session::{SessionStorage, SessionStore};

#[derive(serde::Deserialize)]
struct DefectEnvelope {
    defect: Defect,
}

#[derive(serde::Deserialize)]
struct DefectsEnvelope {
    defects: Vec<Defect>,
}

#[derive(serde::Deserialize)]
struct StatsEnvelope {
    stats: DefectStats,
}

/// `GET /api/defects` — every defect visible to the caller.
pub async fn list<S: SessionStorage>(session: &SessionStore<S>) -> Result<Vec<Defect>, ApiError> {
    let token = session.authorized()?;
    let envelope: DefectsEnvelope =
        http::request(Method::Get, "/api/defects", Some(&token), None).await?;
    Ok(envelope.defects)
}

/// `GET /api/defects/:id`.
pub async fn get<S: SessionStorage>(
    session: &SessionStore<S>,
    id: i64,
) -> Result<Defect, ApiError> {
    let token = session.authorized()?;
    let envelope: DefectEnvelope =
        http::request(Method::Get, &format!("/api/defects/{id}"), Some(&token), None).await?;
    Ok(envelope.defect)
}

/// `GET /api/projects/:id/defects`.
pub async fn list_by_project<S: SessionStorage>(
    session: &SessionStore<S>,
    project_id: i64,
) -> Result<Vec<Defect>, ApiError> {
    let token = session.authorized()?;
    let envelope: DefectsEnvelope = http::request(
        Method::Get,
        &format!("/api/projects/{project_id}/defects"),
        Some(&token),
        None,
    )
    .await?;
    Ok(envelope.defects)
}

/// `POST /api/defects`.
pub async fn create<S: SessionStorage>(
    session: &SessionStore<S>,
    payload: &DefectCreate,
) -> Result<Defect, ApiError> {
    let token = session.authorized()?;
    let body = serde_json::to_value(payload).map_err(|_| ApiError::ResponseParse)?;
    let envelope: DefectEnvelope =
        http::request(Method::Post, "/api/defects", Some(&token), Some(body)).await?;
    Ok(envelope.defect)
}

/// `PUT /api/defects/:id`.
pub async fn update<S: SessionStorage>(
    session: &SessionStore<S>,
    id: i64,
    payload: &DefectUpdate,
) -> Result<Defect, ApiError> {
    let token = session.authorized()?;
    let body = serde_json::to_value(payload).map_err(|_| ApiError::ResponseParse)?;
    let envelope: DefectEnvelope = http::request(
        Method::Put,
        &format!("/api/defects/{id}"),
        Some(&token),
        Some(body),
    )
    .await?;
    Ok(envelope.defect)
}

/// `DELETE /api/defects/:id` (manager/engineer only, enforced server-side).
pub async fn delete<S: SessionStorage>(
    session: &SessionStore<S>,
    id: i64,
) -> Result<(), ApiError> {
    let token = session.authorized()?;
    http::request_empty(Method::Delete, &format!("/api/defects/{id}"), Some(&token)).await
}

/// `GET /api/projects/:id/defects/stats`, falling back to client-side
/// aggregation over the project's defects when the endpoint is absent or
/// errors. Only the fallback fetch can fail.
pub async fn stats<S: SessionStorage>(
    session: &SessionStore<S>,
    project_id: i64,
) -> Result<DefectStats, ApiError> {
    let fetched = fetch_stats(session, project_id).await;
    if fetched.is_ok() {
        return fetched;
    }
    let defects = list_by_project(session, project_id).await;
    resolve_stats(fetched, defects)
}

/// Decide between the endpoint's answer and the client-side fallback.
/// A failed stats fetch (404 on older backends, or any error) aggregates
/// the defect list instead; if that list also failed, its error wins.
fn resolve_stats(
    fetched: Result<DefectStats, ApiError>,
    defects: Result<Vec<Defect>, ApiError>,
) -> Result<DefectStats, ApiError> {
    match fetched {
        Ok(stats) => Ok(stats),
        Err(_) => Ok(aggregate_stats(&defects?)),
    }
}

async fn fetch_stats<S: SessionStorage>(
    session: &SessionStore<S>,
    project_id: i64,
) -> Result<DefectStats, ApiError> {
    let token = session.authorized()?;
    let envelope: StatsEnvelope = http::request(
        Method::Get,
        &format!("/api/projects/{project_id}/defects/stats"),
        Some(&token),
        None,
    )
    .await?;
    Ok(envelope.stats)
}

/// Aggregate statistics from fetched defects: new/in_progress/review count
/// as active, closed as resolved; cancelled defects appear in the total
/// only.
pub fn aggregate_stats(defects: &[Defect]) -> DefectStats {
    let mut stats = DefectStats::default();
    for defect in defects {
        if defect.status.is_active() {
            stats.active += 1;
        } else if defect.status == super::types::DefectStatus::Closed {
            stats.resolved += 1;
        }
        stats.total += 1;
    }
    stats
}

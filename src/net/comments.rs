//! Defect comment service wrappers.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::error::ApiError;
use super::http::{self, Method};
use super::types::{Comment, CommentCreate, User};
use crate::session::{SessionStorage, SessionStore};

#[derive(serde::Deserialize)]
struct CommentEnvelope {
    comment: Comment,
}

#[derive(serde::Deserialize)]
struct CommentsEnvelope {
    // The backend omits the key when a defect has no comments yet.
    #[serde(default)]
    comments: Vec<Comment>,
}

/// `GET /api/defects/:id/comments`.
pub async fn list_for_defect<S: SessionStorage>(
    session: &SessionStore<S>,
    defect_id: i64,
) -> Result<Vec<Comment>, ApiError> {
    let token = session.authorized()?;
    let envelope: CommentsEnvelope = http::request(
        Method::Get,
        &format!("/api/defects/{defect_id}/comments"),
        Some(&token),
        None,
    )
    .await?;
    Ok(envelope.comments)
}

/// `POST /api/defects/comments`.
pub async fn create<S: SessionStorage>(
    session: &SessionStore<S>,
    payload: &CommentCreate,
) -> Result<Comment, ApiError> {
    let token = session.authorized()?;
    let body = serde_json::to_value(payload).map_err(|_| ApiError::ResponseParse)?;
    let envelope: CommentEnvelope =
        http::request(Method::Post, "/api/defects/comments", Some(&token), Some(body)).await?;
    Ok(envelope.comment)
}

/// `DELETE /api/defects/comments/:id`.
pub async fn delete<S: SessionStorage>(
    session: &SessionStore<S>,
    comment_id: i64,
) -> Result<(), ApiError> {
    let token = session.authorized()?;
    http::request_empty(
        Method::Delete,
        &format!("/api/defects/comments/{comment_id}"),
        Some(&token),
    )
    .await
}

/// Whether `identity` may delete `comment`: managers may delete any
/// comment, everyone else only their own.
pub fn can_delete_comment(identity: Option<&User>, comment: &Comment) -> bool {
    let Some(user) = identity else {
        return false;
    };
    user.is_manager() || comment.user_id == user.id
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::comment::{CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Comment on a post as the logged-in user.
///
/// # Returns
/// - `201 Created` - Created comment
/// - `401 Unauthorized` - Nobody is logged in
/// - `404 Not Found` - Post or user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/comment",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Post or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CommentService::new(&state.db);

    let comment = service
        .create(CreateCommentParams::from_dto(payload), &user.email)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Edit a comment's content.
///
/// Only the writer of the comment may edit it.
#[utoipa::path(
    patch,
    path = "/api/comment",
    tag = COMMENT_TAG,
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Successfully updated comment", body = CommentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the writer", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CommentWriter(payload.id)])
        .await?;

    let service = CommentService::new(&state.db);

    let comment = service
        .update(UpdateCommentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// Replies to the comment are kept.
#[utoipa::path(
    delete,
    path = "/api/comment/{id}",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the writer", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CommentWriter(id)])
        .await?;

    let service = CommentService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

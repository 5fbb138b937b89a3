use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::CommentDto,
        post::{CreatePostDto, PaginatedPostsDto, PostDto, PostImageDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            comment::Comment,
            post::{CreatePostParams, PostImage, UpdatePostParams},
        },
        service::{comment::CommentService, post::PostService},
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    10
}

/// Create a post as the logged-in user.
///
/// The first image becomes the thumbnail. Every image is also stored as its
/// own row, retrievable through `/api/post/{id}/images`.
///
/// # Returns
/// - `201 Created` - Created post
/// - `401 Unauthorized` - Nobody is logged in
/// - `404 Not Found` - Board or user not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/post",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Successfully created post", body = PostDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Board or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = PostService::new(&state.db);

    let post = service
        .create(CreatePostParams::from_dto(payload), &user.email)
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Get a page of posts, newest first.
///
/// # Returns
/// - `200 OK` - Posts with pagination metadata
/// - `400 Bad Request` - Page size of zero or a page offset out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/post",
    tag = POST_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Posts per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved posts", body = PaginatedPostsDto),
        (status = 400, description = "Invalid page or page size", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let posts = service
        .get_paginated(pagination.page, pagination.size)
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

/// Update a post's title and content.
///
/// Only the writer of the post may update it.
///
/// # Returns
/// - `200 OK` - Updated post
/// - `401 Unauthorized` - Nobody is logged in
/// - `403 Forbidden` - Logged-in user did not write the post
/// - `404 Not Found` - Post not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/post",
    tag = POST_TAG,
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Successfully updated post", body = PostDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the writer", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostWriter(payload.id)])
        .await?;

    let service = PostService::new(&state.db);

    let post = service.update(UpdatePostParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Get a post by id.
#[utoipa::path(
    get,
    path = "/api/post/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let post = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// Delete a post along with its images and comments.
///
/// Only the writer of the post may delete it.
#[utoipa::path(
    delete,
    path = "/api/post/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted post"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the writer", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostWriter(id)])
        .await?;

    let service = PostService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the images uploaded with a post, in upload order.
#[utoipa::path(
    get,
    path = "/api/post/{id}/images",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved images", body = Vec<PostImageDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_images(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let images: Vec<PostImageDto> = service
        .get_images(id)
        .await?
        .into_iter()
        .map(PostImage::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(images)))
}

/// Get every comment on a post, newest first.
///
/// An unknown post has no comments and returns an empty list.
#[utoipa::path(
    get,
    path = "/api/post/{id}/comments",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    let comments: Vec<CommentDto> = service
        .get_by_post_id(id)
        .await?
        .into_iter()
        .map(Comment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(comments)))
}

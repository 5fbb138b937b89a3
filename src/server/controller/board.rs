use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        board::{BoardDto, CreateBoardDto, UpdateBoardDto},
    },
    server::{
        error::AppError,
        model::board::{Board, CreateBoardParams, UpdateBoardParams},
        service::board::BoardService,
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Create a new board.
///
/// # Returns
/// - `201 Created` - Successfully created board
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/board",
    tag = BOARD_TAG,
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Successfully created board", body = BoardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    Json(payload): Json<CreateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BoardService::new(&state.db);

    let board = service.create(CreateBoardParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

/// List every board ordered by id.
#[utoipa::path(
    get,
    path = "/api/board",
    tag = BOARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved boards", body = Vec<BoardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BoardService::new(&state.db);

    let boards: Vec<BoardDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Board::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(boards)))
}

/// Rename a board.
///
/// # Returns
/// - `200 OK` - Updated board
/// - `404 Not Found` - No board with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/board",
    tag = BOARD_TAG,
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Successfully updated board", body = BoardDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    Json(payload): Json<UpdateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BoardService::new(&state.db);

    let board = service.update(UpdateBoardParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Get a board by id.
#[utoipa::path(
    get,
    path = "/api/board/{id}",
    tag = BOARD_TAG,
    params(
        ("id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved board", body = BoardDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BoardService::new(&state.db);

    let board = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Delete a board and every post on it.
///
/// # Returns
/// - `204 No Content` - Board deleted
/// - `404 Not Found` - No board with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/board/{id}",
    tag = BOARD_TAG,
    params(
        ("id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted board"),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BoardService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{__path_get_user, __path_login, __path_logout, get_user, login, logout},
        board::{
            __path_create_board, __path_delete_board, __path_get_board, __path_get_boards,
            __path_update_board, create_board, delete_board, get_board, get_boards, update_board,
        },
        comment::{
            __path_create_comment, __path_delete_comment, __path_update_comment, create_comment,
            delete_comment, update_comment,
        },
        post::{
            __path_create_post, __path_delete_post, __path_get_post, __path_get_post_comments,
            __path_get_post_images, __path_get_posts, __path_update_post, create_post, delete_post,
            get_post, get_post_comments, get_post_images, get_posts, update_post,
        },
        user::{__path_register_user, register_user},
    },
    docs::ApiDoc,
    state::AppState,
};

/// Builds the API router and serves its OpenAPI document through Swagger UI.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(register_user))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(create_board, get_boards, update_board))
        .routes(routes!(get_board, delete_board))
        .routes(routes!(create_post, get_posts, update_post))
        .routes(routes!(get_post, delete_post))
        .routes(routes!(get_post_images))
        .routes(routes!(get_post_comments))
        .routes(routes!(create_comment, update_comment))
        .routes(routes!(delete_comment))
}

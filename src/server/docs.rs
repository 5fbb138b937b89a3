//! OpenAPI document metadata.
//!
//! Paths are collected by the router from the handlers it mounts, so this
//! only carries the document info and tag descriptions.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "orury API",
        description = "Community boards with posts, comments and session login."
    ),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "User registration"),
        (name = "board", description = "Board management"),
        (name = "post", description = "Posts, their images and comments"),
        (name = "comment", description = "Comments on posts")
    )
)]
pub struct ApiDoc;

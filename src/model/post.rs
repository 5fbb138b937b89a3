use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub board_id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    /// Comma-joined image URLs in upload order.
    pub images: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreatePostDto {
    pub board_id: i32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdatePostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PostImageDto {
    pub id: i32,
    pub post_id: i32,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginationDto {
    /// Zero-based page index.
    pub page: u64,
    pub current_elements: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedPostsDto {
    pub posts: Vec<PostDto>,
    pub pagination: PaginationDto,
}

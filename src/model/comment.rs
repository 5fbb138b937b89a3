use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub nickname: String,
    pub parent_id: Option<i32>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateCommentDto {
    pub post_id: i32,
    pub content: String,
    pub nickname: String,
    /// Comment being replied to; omit for a top-level comment.
    #[serde(default)]
    pub parent_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateCommentDto {
    pub id: i32,
    pub content: String,
}

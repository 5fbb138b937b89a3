//! Comment factory for creating test comment entities.

use crate::factory::helpers::{next_id, TEST_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    user_id: i32,
    content: String,
    nickname: String,
    parent_id: Option<i32>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new top-level CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"`
    /// - nickname: `"nick{id}"`
    /// - parent_id: `None`
    pub fn new(db: &'a DatabaseConnection, post_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            post_id,
            user_id,
            content: format!("Comment {}", id),
            nickname: format!("nick{}", id),
            parent_id: None,
        }
    }

    /// Sets the comment content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the nickname shown with the comment.
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Makes the comment a reply to `parent_id`.
    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            id: ActiveValue::NotSet,
            post_id: ActiveValue::Set(self.post_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            nickname: ActiveValue::Set(self.nickname),
            parent_id: ActiveValue::Set(self.parent_id),
            created_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            created_at: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, user_id).build().await
}

//! Post factory for creating test post entities.
//!
//! The factory only writes the `post` row. `thumbnail_url` and `images` are
//! derived from the configured image list the same way the application does,
//! but no `post_image` rows are inserted.

use crate::factory::helpers::{next_id, TEST_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::post::PostFactory;
///
/// let post = PostFactory::new(&db, board.id, user.id)
///     .title("Hello")
///     .images(vec!["a.jpg".to_string(), "b.jpg".to_string()])
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    board_id: i32,
    user_id: i32,
    title: String,
    content: String,
    images: Vec<String>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"`
    /// - content: `"Test post content"`
    /// - images: empty
    pub fn new(db: &'a DatabaseConnection, board_id: i32, user_id: i32) -> Self {
        Self {
            db,
            board_id,
            user_id,
            title: format!("Post {}", next_id()),
            content: "Test post content".to_string(),
            images: Vec::new(),
        }
    }

    /// Sets the post title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the post content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the image URLs used to derive `thumbnail_url` and `images`.
    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        let now = Utc::now();
        let thumbnail_url = self.images.first().cloned();
        let images = if self.images.is_empty() {
            None
        } else {
            Some(self.images.join(","))
        };

        entity::post::ActiveModel {
            id: ActiveValue::NotSet,
            board_id: ActiveValue::Set(self.board_id),
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            thumbnail_url: ActiveValue::Set(thumbnail_url),
            images: ActiveValue::Set(images),
            created_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            created_at: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values on the given board for the given user.
pub async fn create_post(
    db: &DatabaseConnection,
    board_id: i32,
    user_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, board_id, user_id).build().await
}

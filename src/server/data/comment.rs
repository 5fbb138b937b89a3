//! Comment data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, NewComment};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new comment.
    pub async fn create(&self, comment: NewComment) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(comment.post_id),
            user_id: ActiveValue::Set(comment.user_id),
            content: ActiveValue::Set(comment.content),
            nickname: ActiveValue::Set(comment.nickname),
            parent_id: ActiveValue::Set(comment.parent_id),
            created_by: ActiveValue::Set(comment.audit.created_by),
            created_at: ActiveValue::Set(comment.audit.created_at),
            updated_by: ActiveValue::Set(comment.audit.updated_by),
            updated_at: ActiveValue::Set(comment.audit.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Finds a comment by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Writes every column of `comment` back to its row.
    pub async fn save(&self, comment: Comment) -> Result<Comment, DbErr> {
        let entity = comment.into_active_model().update(self.db).await?;

        Ok(Comment::from_entity(entity))
    }

    /// Deletes a comment. Returns false if no row had that id.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every comment on a post, newest (highest id) first.
    ///
    /// Replies are returned alongside top-level comments; callers rebuild the
    /// thread from `parent_id`.
    pub async fn get_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }
}

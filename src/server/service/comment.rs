//! Comment service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository, user::UserRepository},
    error::AppError,
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        comment::{Comment, CreateCommentParams, NewComment, UpdateCommentParams},
    },
};

/// Service providing business logic for comments.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on a post written by the user with `email`.
    ///
    /// The post is resolved before the user. `parent_id` is stored as given;
    /// the referenced comment is not checked.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - No such post, or no user with that email
    pub async fn create(
        &self,
        params: CreateCommentParams,
        email: &str,
    ) -> Result<Comment, AppError> {
        let post = PostRepository::new(self.db)
            .find_by_id(params.post_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Post with id {} not found", params.post_id))
            })?;

        let user = UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;

        let new_comment =
            NewComment::from_params(params, user.id, Audit::stamp_new(SYSTEM_ACTOR));
        let comment = CommentRepository::new(self.db).create(new_comment).await?;

        tracing::info!(
            comment_id = comment.id,
            post_id = post.id,
            user_id = user.id,
            parent_id = ?comment.parent_id,
            "Created comment"
        );

        Ok(comment)
    }

    /// Gets a comment by id, or NotFound.
    pub async fn get_by_id(&self, id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment with id {} not found", id)))
    }

    /// Overwrites the content of an existing comment.
    pub async fn update(&self, params: UpdateCommentParams) -> Result<Comment, AppError> {
        let mut comment = self.get_by_id(params.id).await?;
        comment.content = params.content;
        comment.audit.touch(SYSTEM_ACTOR);

        let comment = CommentRepository::new(self.db).save(comment).await?;

        tracing::info!(comment_id = comment.id, "Updated comment");

        Ok(comment)
    }

    /// Deletes a comment. Replies to it are kept.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Comment with id {} not found",
                id
            )));
        }

        tracing::info!(comment_id = id, "Deleted comment");

        Ok(())
    }

    /// Gets every comment on a post, newest first. Unknown posts yield an empty list.
    pub async fn get_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_by_post_id(post_id)
            .await?)
    }

    /// Checks whether the user with `email` wrote the comment.
    ///
    /// The comment is looked up before the user.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the user's id equals the comment's writer id
    /// - `Err(AppError::NotFound)` - Comment or user missing
    pub async fn is_writer(&self, email: &str, comment_id: i32) -> Result<bool, AppError> {
        let comment = self.get_by_id(comment_id).await?;

        let user = UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;

        Ok(user.id == comment.user_id)
    }
}

//! Post service for business logic.
//!
//! Creation resolves the writer from the caller's email and checks the board
//! exists before anything is written. Updates only touch title and content;
//! the writer, board and images of a post are fixed at creation.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        board::BoardRepository, post::PostRepository, post_image::PostImageRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        post::{CreatePostParams, NewPost, PaginatedPosts, Post, PostImage, UpdatePostParams},
    },
};

// SQLite binds LIMIT and OFFSET as i64.
const MAX_SQL_OFFSET: u64 = i64::MAX as u64;

/// Service providing business logic for posts.
pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post written by the user with `email`.
    ///
    /// The user is resolved first, then the board. The post and its image
    /// rows are stored together.
    ///
    /// # Arguments
    /// - `params` - Board, title, content and image URLs
    /// - `email` - Email of the caller, who becomes the writer
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(AppError::NotFound)` - No user with that email, or no such board
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePostParams, email: &str) -> Result<Post, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;

        let board = BoardRepository::new(self.db)
            .find_by_id(params.board_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Board with id {} not found", params.board_id))
            })?;

        let new_post = NewPost::from_params(params, user.id, Audit::stamp_new(SYSTEM_ACTOR));
        let post = PostRepository::new(self.db).create(new_post).await?;

        tracing::info!(
            post_id = post.id,
            board_id = board.id,
            user_id = user.id,
            "Created post"
        );

        Ok(post)
    }

    /// Gets a post by id, or NotFound.
    pub async fn get_by_id(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))
    }

    /// Overwrites title and content of an existing post.
    ///
    /// # Returns
    /// - `Ok(Post)` - The updated post
    /// - `Err(AppError::NotFound)` - No post with that id
    pub async fn update(&self, params: UpdatePostParams) -> Result<Post, AppError> {
        let mut post = self.get_by_id(params.id).await?;
        post.title = params.title;
        post.content = params.content;
        post.audit.touch(SYSTEM_ACTOR);

        let post = PostRepository::new(self.db).save(post).await?;

        tracing::info!(post_id = post.id, "Updated post");

        Ok(post)
    }

    /// Deletes a post along with its images and comments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PostRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Post with id {} not found", id)));
        }

        tracing::info!(post_id = id, "Deleted post");

        Ok(())
    }

    /// Gets one page of posts, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `size` - Posts per page
    ///
    /// # Returns
    /// - `Ok(PaginatedPosts)` - The page with totals across all posts
    /// - `Err(AppError::BadRequest)` - `size` is zero, or the page offset does
    ///   not fit the database's signed 64-bit LIMIT/OFFSET
    pub async fn get_paginated(&self, page: u64, size: u64) -> Result<PaginatedPosts, AppError> {
        if size == 0 {
            return Err(AppError::BadRequest(
                "Page size must be greater than zero".to_string(),
            ));
        }

        if size > MAX_SQL_OFFSET {
            return Err(AppError::BadRequest(format!(
                "Page size must be at most {}",
                MAX_SQL_OFFSET
            )));
        }

        let in_range = page
            .checked_mul(size)
            .is_some_and(|offset| offset <= MAX_SQL_OFFSET);
        if !in_range {
            return Err(AppError::BadRequest(format!(
                "Page {} is out of range for page size {}",
                page, size
            )));
        }

        let (posts, total_elements) = PostRepository::new(self.db)
            .get_paginated(page, size)
            .await?;

        tracing::debug!(page, size, total_elements, "Fetched post page");

        Ok(PaginatedPosts {
            posts,
            page,
            size,
            total_elements,
            total_pages: total_elements.div_ceil(size),
        })
    }

    /// Gets the images uploaded with a post, in upload order.
    pub async fn get_images(&self, post_id: i32) -> Result<Vec<PostImage>, AppError> {
        self.get_by_id(post_id).await?;

        Ok(PostImageRepository::new(self.db)
            .get_by_post_id(post_id)
            .await?)
    }

    /// Checks whether the user with `email` wrote the post.
    ///
    /// The post is looked up before the user, so a missing post is reported
    /// even when the email is also unknown.
    ///
    /// # Returns
    /// - `Ok(bool)` - Whether the user's id equals the post's writer id
    /// - `Err(AppError::NotFound)` - Post or user missing
    pub async fn is_writer(&self, email: &str, post_id: i32) -> Result<bool, AppError> {
        let post = self.get_by_id(post_id).await?;

        let user = UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))?;

        Ok(user.id == post.user_id)
    }
}

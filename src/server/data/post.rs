//! Post data repository for database operations.
//!
//! Posts are inserted together with their `post_image` rows inside a single
//! transaction so a post never exists with only part of its images.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, TransactionTrait,
};

use crate::server::model::post::{NewPost, Post};

/// Repository providing database operations for posts.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a post and one image row per URL in `post.image_urls`.
    ///
    /// Image rows share the post's audit stamps. The transaction is rolled
    /// back if any insert fails.
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(DbErr)` - Database error, e.g. a missing board or user
    pub async fn create(&self, post: NewPost) -> Result<Post, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::post::ActiveModel {
            board_id: ActiveValue::Set(post.board_id),
            user_id: ActiveValue::Set(post.user_id),
            title: ActiveValue::Set(post.title),
            content: ActiveValue::Set(post.content),
            thumbnail_url: ActiveValue::Set(post.thumbnail_url),
            images: ActiveValue::Set(post.images),
            created_by: ActiveValue::Set(post.audit.created_by.clone()),
            created_at: ActiveValue::Set(post.audit.created_at),
            updated_by: ActiveValue::Set(post.audit.updated_by.clone()),
            updated_at: ActiveValue::Set(post.audit.updated_at),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for image_url in post.image_urls {
            entity::post_image::ActiveModel {
                post_id: ActiveValue::Set(entity.id),
                image_url: ActiveValue::Set(image_url),
                created_by: ActiveValue::Set(post.audit.created_by.clone()),
                created_at: ActiveValue::Set(post.audit.created_at),
                updated_by: ActiveValue::Set(post.audit.updated_by.clone()),
                updated_at: ActiveValue::Set(post.audit.updated_at),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Post::from_entity(entity))
    }

    /// Finds a post by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Writes every column of `post` back to its row.
    pub async fn save(&self, post: Post) -> Result<Post, DbErr> {
        let entity = post.into_active_model().update(self.db).await?;

        Ok(Post::from_entity(entity))
    }

    /// Deletes a post. Images and comments go with it through cascading keys.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No post had that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets one page of posts ordered by id descending.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size, must be greater than zero
    ///
    /// # Returns
    /// - `Ok((Vec<Post>, u64))` - Posts on the page and the total number of posts
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<(Vec<Post>, u64), DbErr> {
        let paginator = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let posts = paginator.fetch_page(page).await?;

        Ok((posts.into_iter().map(Post::from_entity).collect(), total))
    }
}

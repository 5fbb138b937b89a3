//! Post domain models and parameters.
//!
//! A post belongs to a board and is written by a user. The image URLs given at
//! creation are stored twice: as one `post_image` row each, and denormalised
//! onto the post as a thumbnail (the first URL) and a comma-joined list. An
//! empty image list leaves both post columns absent rather than empty.

use sea_orm::ActiveValue;

use crate::{
    model::post::{
        CreatePostDto, PaginatedPostsDto, PaginationDto, PostDto, PostImageDto, UpdatePostDto,
    },
    server::model::audit::Audit,
};

/// Separator used when joining image URLs onto the post row.
pub const IMAGE_SEPARATOR: &str = ",";

/// A post with its denormalised image columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub board_id: i32,
    /// Writer of the post. Never changes after creation.
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub images: Option<String>,
    pub audit: Audit,
}

impl Post {
    /// Converts an entity model to a post domain model at the repository boundary.
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            board_id: entity.board_id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            thumbnail_url: entity.thumbnail_url,
            images: entity.images,
            audit: Audit {
                created_by: entity.created_by,
                created_at: entity.created_at,
                updated_by: entity.updated_by,
                updated_at: entity.updated_at,
            },
        }
    }

    /// Converts the post into a fully set active model for a full-record save.
    pub fn into_active_model(self) -> entity::post::ActiveModel {
        entity::post::ActiveModel {
            id: ActiveValue::Set(self.id),
            board_id: ActiveValue::Set(self.board_id),
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            thumbnail_url: ActiveValue::Set(self.thumbnail_url),
            images: ActiveValue::Set(self.images),
            created_by: ActiveValue::Set(self.audit.created_by),
            created_at: ActiveValue::Set(self.audit.created_at),
            updated_by: ActiveValue::Set(self.audit.updated_by),
            updated_at: ActiveValue::Set(self.audit.updated_at),
        }
    }

    /// Converts the post domain model to a DTO for API responses.
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.id,
            board_id: self.board_id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            thumbnail_url: self.thumbnail_url,
            images: self.images,
            created_by: self.audit.created_by,
            created_at: self.audit.created_at,
            updated_by: self.audit.updated_by,
            updated_at: self.audit.updated_at,
        }
    }
}

/// One image attached to a post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostImage {
    pub id: i32,
    pub post_id: i32,
    pub image_url: String,
    pub audit: Audit,
}

impl PostImage {
    pub fn from_entity(entity: entity::post_image::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            image_url: entity.image_url,
            audit: Audit {
                created_by: entity.created_by,
                created_at: entity.created_at,
                updated_by: entity.updated_by,
                updated_at: entity.updated_at,
            },
        }
    }

    pub fn into_dto(self) -> PostImageDto {
        PostImageDto {
            id: self.id,
            post_id: self.post_id,
            image_url: self.image_url,
        }
    }
}

/// Parameters for creating a post, as received from the caller.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub board_id: i32,
    pub title: String,
    pub content: String,
    /// Image URLs in upload order. May be empty.
    pub images: Vec<String>,
}

impl CreatePostParams {
    pub fn from_dto(dto: CreatePostDto) -> Self {
        Self {
            board_id: dto.board_id,
            title: dto.title,
            content: dto.content,
            images: dto.images,
        }
    }
}

/// A post ready to be inserted, with writer resolved and image columns derived.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub board_id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub images: Option<String>,
    /// One `post_image` row is written per entry.
    pub image_urls: Vec<String>,
    pub audit: Audit,
}

impl NewPost {
    /// Builds the insert model for `params` written by `user_id`.
    ///
    /// # Arguments
    /// - `params` - Creation parameters from the caller
    /// - `user_id` - Id of the resolved writer
    /// - `audit` - Audit stamps for the new post and its images
    pub fn from_params(params: CreatePostParams, user_id: i32, audit: Audit) -> Self {
        let thumbnail_url = params.images.first().cloned();
        let images = if params.images.is_empty() {
            None
        } else {
            Some(params.images.join(IMAGE_SEPARATOR))
        };

        Self {
            board_id: params.board_id,
            user_id,
            title: params.title,
            content: params.content,
            thumbnail_url,
            images,
            image_urls: params.images,
            audit,
        }
    }
}

/// Parameters for editing a post. Only title and content can change.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub title: String,
    pub content: String,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            content: dto.content,
        }
    }
}

/// One page of posts, newest first, with totals across all pages.
#[derive(Debug, Clone)]
pub struct PaginatedPosts {
    pub posts: Vec<Post>,
    /// Zero-based page index.
    pub page: u64,
    /// Requested page size.
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self) -> PaginatedPostsDto {
        let current_elements = self.posts.len() as u64;

        PaginatedPostsDto {
            posts: self.posts.into_iter().map(Post::into_dto).collect(),
            pagination: PaginationDto {
                page: self.page,
                current_elements,
                size: self.size,
                total_elements: self.total_elements,
                total_pages: self.total_pages,
            },
        }
    }
}

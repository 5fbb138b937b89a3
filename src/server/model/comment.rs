//! Comment domain models and parameters.

use sea_orm::ActiveValue;

use crate::{
    model::comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    server::model::audit::Audit,
};

/// A comment on a post. `parent_id` marks a reply; absent means top-level.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub nickname: String,
    pub parent_id: Option<i32>,
    pub audit: Audit,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            user_id: entity.user_id,
            content: entity.content,
            nickname: entity.nickname,
            parent_id: entity.parent_id,
            audit: Audit {
                created_by: entity.created_by,
                created_at: entity.created_at,
                updated_by: entity.updated_by,
                updated_at: entity.updated_at,
            },
        }
    }

    /// Converts the comment into a fully set active model for a full-record save.
    pub fn into_active_model(self) -> entity::comment::ActiveModel {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(self.id),
            post_id: ActiveValue::Set(self.post_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            nickname: ActiveValue::Set(self.nickname),
            parent_id: ActiveValue::Set(self.parent_id),
            created_by: ActiveValue::Set(self.audit.created_by),
            created_at: ActiveValue::Set(self.audit.created_at),
            updated_by: ActiveValue::Set(self.audit.updated_by),
            updated_at: ActiveValue::Set(self.audit.updated_at),
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            user_id: self.user_id,
            content: self.content,
            nickname: self.nickname,
            parent_id: self.parent_id,
            created_by: self.audit.created_by,
            created_at: self.audit.created_at,
            updated_by: self.audit.updated_by,
            updated_at: self.audit.updated_at,
        }
    }
}

/// Parameters for creating a comment, as received from the caller.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post_id: i32,
    pub content: String,
    pub nickname: String,
    pub parent_id: Option<i32>,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            post_id: dto.post_id,
            content: dto.content,
            nickname: dto.nickname,
            parent_id: dto.parent_id,
        }
    }
}

/// A comment ready to be inserted, with its writer resolved.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub nickname: String,
    pub parent_id: Option<i32>,
    pub audit: Audit,
}

impl NewComment {
    pub fn from_params(params: CreateCommentParams, user_id: i32, audit: Audit) -> Self {
        Self {
            post_id: params.post_id,
            user_id,
            content: params.content,
            nickname: params.nickname,
            parent_id: params.parent_id,
            audit,
        }
    }
}

/// Parameters for editing a comment. Only the content can change.
#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub id: i32,
    pub content: String,
}

impl UpdateCommentParams {
    pub fn from_dto(dto: UpdateCommentDto) -> Self {
        Self {
            id: dto.id,
            content: dto.content,
        }
    }
}

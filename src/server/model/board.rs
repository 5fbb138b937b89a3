//! Board domain models and parameters.

use sea_orm::ActiveValue;

use crate::{
    model::board::{BoardDto, CreateBoardDto, UpdateBoardDto},
    server::model::audit::Audit,
};

/// A board grouping posts under a title.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: i32,
    pub title: String,
    pub audit: Audit,
}

impl Board {
    /// Converts an entity model to a board domain model at the repository boundary.
    pub fn from_entity(entity: entity::board::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            audit: Audit {
                created_by: entity.created_by,
                created_at: entity.created_at,
                updated_by: entity.updated_by,
                updated_at: entity.updated_at,
            },
        }
    }

    /// Converts the board into a fully set active model for a full-record save.
    pub fn into_active_model(self) -> entity::board::ActiveModel {
        entity::board::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            created_by: ActiveValue::Set(self.audit.created_by),
            created_at: ActiveValue::Set(self.audit.created_at),
            updated_by: ActiveValue::Set(self.audit.updated_by),
            updated_at: ActiveValue::Set(self.audit.updated_at),
        }
    }

    /// Converts the board domain model to a DTO for API responses.
    pub fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id,
            title: self.title,
            created_by: self.audit.created_by,
            created_at: self.audit.created_at,
            updated_by: self.audit.updated_by,
            updated_at: self.audit.updated_at,
        }
    }
}

/// Parameters for creating a board.
#[derive(Debug, Clone)]
pub struct CreateBoardParams {
    pub title: String,
}

impl CreateBoardParams {
    pub fn from_dto(dto: CreateBoardDto) -> Self {
        Self { title: dto.title }
    }
}

/// Parameters for renaming an existing board.
#[derive(Debug, Clone)]
pub struct UpdateBoardParams {
    pub id: i32,
    pub title: String,
}

impl UpdateBoardParams {
    pub fn from_dto(dto: UpdateBoardDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
        }
    }
}

//! User domain models and parameters.
//!
//! Users are identified by email at the API boundary. The numeric id is what
//! posts and comments reference as their writer.

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::model::audit::Audit,
};

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique lookup key used for login and ownership checks.
    pub email: String,
    pub name: String,
    pub audit: Audit,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            audit: Audit {
                created_by: entity.created_by,
                created_at: entity.created_at,
                updated_by: entity.updated_by,
                updated_at: entity.updated_at,
            },
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
        }
    }
}

/// Parameters for registering a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
        }
    }
}

//! Board factory for creating test board entities.

use crate::factory::helpers::{next_id, TEST_ACTOR};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boards.
pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with title `"Board {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Board {}", next_id()),
        }
    }

    /// Sets the board title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the board entity into the database.
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        let now = Utc::now();
        entity::board::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            created_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            created_at: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(TEST_ACTOR.to_string()),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board with default values.
pub async fn create_board(db: &DatabaseConnection) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db).build().await
}

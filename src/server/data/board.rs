use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::{
    audit::Audit,
    board::{Board, CreateBoardParams},
};

pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new board
    pub async fn create(&self, params: CreateBoardParams, audit: Audit) -> Result<Board, DbErr> {
        let entity = entity::board::ActiveModel {
            title: ActiveValue::Set(params.title),
            created_by: ActiveValue::Set(audit.created_by),
            created_at: ActiveValue::Set(audit.created_at),
            updated_by: ActiveValue::Set(audit.updated_by),
            updated_at: ActiveValue::Set(audit.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Board::from_entity(entity))
    }

    /// Gets every board ordered by id ascending
    pub async fn get_all(&self) -> Result<Vec<Board>, DbErr> {
        let entities = entity::prelude::Board::find()
            .order_by_asc(entity::board::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Board::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Board>, DbErr> {
        let entity = entity::prelude::Board::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Board::from_entity))
    }

    /// Writes every column of `board` back to its row
    pub async fn save(&self, board: Board) -> Result<Board, DbErr> {
        let entity = board.into_active_model().update(self.db).await?;

        Ok(Board::from_entity(entity))
    }

    /// Deletes a board and, through cascading keys, its posts.
    /// Returns false if no row had that id.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Board::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

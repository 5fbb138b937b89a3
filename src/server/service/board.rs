use sea_orm::DatabaseConnection;

use crate::server::{
    data::board::BoardRepository,
    error::AppError,
    model::{
        audit::{Audit, SYSTEM_ACTOR},
        board::{Board, CreateBoardParams, UpdateBoardParams},
    },
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new board
    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let repo = BoardRepository::new(self.db);

        let board = repo.create(params, Audit::stamp_new(SYSTEM_ACTOR)).await?;

        tracing::info!(board_id = board.id, title = %board.title, "Created board");

        Ok(board)
    }

    /// Gets all boards ordered by id
    pub async fn get_all(&self) -> Result<Vec<Board>, AppError> {
        let repo = BoardRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a board by id, or NotFound
    pub async fn get_by_id(&self, id: i32) -> Result<Board, AppError> {
        let repo = BoardRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board with id {} not found", id)))
    }

    /// Renames a board and stamps the update
    pub async fn update(&self, params: UpdateBoardParams) -> Result<Board, AppError> {
        let repo = BoardRepository::new(self.db);

        let mut board = self.get_by_id(params.id).await?;
        board.title = params.title;
        board.audit.touch(SYSTEM_ACTOR);

        let board = repo.save(board).await?;

        tracing::info!(board_id = board.id, "Updated board");

        Ok(board)
    }

    /// Deletes a board along with its posts
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = BoardRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!("Board with id {} not found", id)));
        }

        tracing::info!(board_id = id, "Deleted board");

        Ok(())
    }
}

use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Reading or writing the test session failed.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}

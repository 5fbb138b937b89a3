//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources cloned into every handler through axum's `State` extractor.
///
/// `DatabaseConnection` is a pool, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

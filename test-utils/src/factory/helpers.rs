//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Actor stamped into audit columns by every factory.
pub const TEST_ACTOR: &str = "admin";

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a board and a post written by that user on that board.
///
/// # Returns
/// - `Ok((user, board, post))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::board::Model,
        entity::post::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let board = crate::factory::board::create_board(db).await?;
    let post = crate::factory::post::create_post(db, board.id, user.id).await?;

    Ok((user, board, post))
}

/// Creates a full chain of user, board, post and a comment by the same user.
///
/// # Returns
/// - `Ok((user, board, post, comment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::board::Model,
        entity::post::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (user, board, post) = create_post_with_dependencies(db).await?;
    let comment = crate::factory::comment::create_comment(db, post.id, user.id).await?;

    Ok((user, board, post, comment))
}

use super::*;

/// Tests getting a board that does not exist.
///
/// Expected: Err(AppError::NotFound) naming the id
#[tokio::test]
async fn fails_for_missing_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Board)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoardService::new(db).get_by_id(42).await;

    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("42")),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }

    Ok(())
}

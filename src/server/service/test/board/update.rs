use super::*;

/// Tests renaming a board.
///
/// Expected: Ok(Board) with the new title and unchanged creation stamp
#[tokio::test]
async fn renames_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Board)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::board::BoardFactory::new(db)
        .title("Old")
        .build()
        .await?;

    let service = BoardService::new(db);
    let updated = service
        .update(UpdateBoardParams {
            id: created.id,
            title: "New".to_string(),
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.audit.created_by, created.created_by);
    assert_eq!(updated.audit.updated_by, SYSTEM_ACTOR);

    assert_eq!(service.get_by_id(created.id).await?.title, "New");

    Ok(())
}

/// Tests updating a board that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Board)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoardService::new(db)
        .update(UpdateBoardParams {
            id: 7,
            title: "New".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

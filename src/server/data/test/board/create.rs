use super::*;

/// Tests creating a board and reading it back.
///
/// Expected: Ok(Board) equal to the row found by id
#[tokio::test]
async fn creates_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Board)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoardRepository::new(db);
    let board = repo
        .create(
            CreateBoardParams {
                title: "Free".to_string(),
            },
            Audit::stamp_new(SYSTEM_ACTOR),
        )
        .await?;

    assert_eq!(board.title, "Free");

    let found = repo.find_by_id(board.id).await?;
    assert_eq!(found, Some(board));

    Ok(())
}

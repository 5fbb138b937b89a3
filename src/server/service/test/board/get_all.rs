use super::*;

/// Tests listing all boards.
///
/// Expected: Ok(Vec<Board>) ordered by id ascending
#[tokio::test]
async fn lists_boards_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Board)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_board(db).await?;
    let b = factory::create_board(db).await?;
    let c = factory::create_board(db).await?;

    let boards = BoardService::new(db).get_all().await?;

    let ids: Vec<i32> = boards.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);

    Ok(())
}

use super::*;

/// Tests listing boards.
///
/// Verifies boards come back ordered by id ascending regardless of title.
///
/// Expected: Ok(Vec<Board>) in creation order
#[tokio::test]
async fn returns_boards_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Board)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::board::BoardFactory::new(db).title("Zeta").build().await?;
    let second = factory::board::BoardFactory::new(db).title("Alpha").build().await?;

    let repo = BoardRepository::new(db);
    let boards = repo.get_all().await?;

    let ids: Vec<i32> = boards.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing boards on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_boards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Board)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boards = BoardRepository::new(db).get_all().await?;

    assert!(boards.is_empty());

    Ok(())
}

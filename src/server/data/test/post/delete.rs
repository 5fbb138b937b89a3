use super::*;

/// Tests that deleting a post removes its images and comments.
///
/// Expected: Ok(true) and no dependent rows remain
#[tokio::test]
async fn deletes_post_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let board = factory::create_board(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(new_post(board.id, user.id, vec!["a.jpg"]))
        .await?;
    factory::create_comment(db, post.id, user.id).await?;

    let deleted = repo.delete(post.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(post.id).await?.is_none());
    assert_eq!(entity::prelude::PostImage::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a post id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PostRepository::new(db).delete(12345).await?;

    assert!(!deleted);

    Ok(())
}

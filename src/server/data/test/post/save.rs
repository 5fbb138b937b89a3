use super::*;

/// Tests the full-record save of a post.
///
/// Expected: title and content change, owner and board stay the same
#[tokio::test]
async fn saves_modified_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, board, created) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = PostRepository::new(db);
    let mut post = repo.find_by_id(created.id).await?.unwrap();
    post.title = "New title".to_string();
    post.content = "New content".to_string();

    let saved = repo.save(post).await?;

    assert_eq!(saved.title, "New title");
    assert_eq!(saved.content, "New content");
    assert_eq!(saved.user_id, user.id);
    assert_eq!(saved.board_id, board.id);

    Ok(())
}

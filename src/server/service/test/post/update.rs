use super::*;

/// Tests editing a post.
///
/// Verifies title and content change while writer, board and images stay
/// as they were at creation.
///
/// Expected: Ok(Post) with new text and original ownership
#[tokio::test]
async fn updates_text_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let board = factory::create_board(db).await?;
    let created = factory::post::PostFactory::new(db, board.id, user.id)
        .images(vec!["a.jpg".to_string()])
        .build()
        .await?;

    let service = PostService::new(db);
    let updated = service
        .update(UpdatePostParams {
            id: created.id,
            title: "Edited".to_string(),
            content: "Edited content".to_string(),
        })
        .await?;

    assert_eq!(updated.title, "Edited");
    assert_eq!(updated.content, "Edited content");
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.board_id, board.id);
    assert_eq!(updated.thumbnail_url.as_deref(), Some("a.jpg"));
    assert_eq!(updated.images.as_deref(), Some("a.jpg"));

    let fetched = service.get_by_id(created.id).await?;
    assert_eq!(fetched.title, "Edited");
    assert_eq!(fetched.user_id, user.id);

    Ok(())
}

/// Tests editing a post that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostService::new(db)
        .update(UpdatePostParams {
            id: 1,
            title: "t".to_string(),
            content: "c".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

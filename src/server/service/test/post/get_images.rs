use super::*;

/// Tests fetching the image rows written at creation.
///
/// Expected: Ok(Vec<PostImage>) with one row per URL in order
#[tokio::test]
async fn returns_images_written_at_creation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "u1@x.com").await?;
    let board = factory::create_board(db).await?;

    let service = PostService::new(db);
    let post = service
        .create(create_params(board.id, &["a.jpg", "b.jpg"]), "u1@x.com")
        .await?;

    let images = service.get_images(post.id).await?;

    let urls: Vec<String> = images.into_iter().map(|i| i.image_url).collect();
    assert_eq!(urls, vec!["a.jpg".to_string(), "b.jpg".to_string()]);

    Ok(())
}

/// Tests fetching images of a missing post.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostService::new(db).get_images(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

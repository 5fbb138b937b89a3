use super::*;

/// Tests creating a top-level comment.
///
/// Expected: Ok(Comment) with the caller as writer and no parent
#[tokio::test]
async fn creates_top_level_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _board, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let comment = CommentService::new(db)
        .create(
            CreateCommentParams {
                post_id: post.id,
                content: "first".to_string(),
                nickname: "nick".to_string(),
                parent_id: None,
            },
            &user.email,
        )
        .await?;

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.user_id, user.id);
    assert_eq!(comment.content, "first");
    assert_eq!(comment.nickname, "nick");
    assert_eq!(comment.parent_id, None);

    Ok(())
}

/// Tests creating a reply.
///
/// Expected: Ok(Comment) with parent_id set and its own server-assigned id
#[tokio::test]
async fn creates_reply() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _board, post, parent) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let reply = CommentService::new(db)
        .create(
            CreateCommentParams {
                post_id: post.id,
                content: "reply".to_string(),
                nickname: "nick".to_string(),
                parent_id: Some(parent.id),
            },
            &user.email,
        )
        .await?;

    assert_eq!(reply.parent_id, Some(parent.id));
    assert!(reply.id > parent.id);

    Ok(())
}

/// Tests commenting on a missing post with an unknown email.
///
/// The post is resolved before the user.
///
/// Expected: Err(AppError::NotFound) naming the post
#[tokio::test]
async fn fails_for_missing_post_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CommentService::new(db)
        .create(
            CreateCommentParams {
                post_id: 31,
                content: "c".to_string(),
                nickname: "n".to_string(),
                parent_id: None,
            },
            "ghost@x.com",
        )
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("Post with id 31")),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }

    Ok(())
}

/// Tests commenting with an unknown email.
///
/// Expected: Err(AppError::NotFound) naming the email
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _board, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let result = CommentService::new(db)
        .create(
            CreateCommentParams {
                post_id: post.id,
                content: "c".to_string(),
                nickname: "n".to_string(),
                parent_id: None,
            },
            "ghost@x.com",
        )
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("ghost@x.com")),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }

    Ok(())
}

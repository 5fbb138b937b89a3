use super::*;

/// Tests listing the comments of a post.
///
/// Verifies comments are ordered by id descending and comments on other
/// posts are excluded.
///
/// Expected: Ok(Vec<Comment>) newest first
#[tokio::test]
async fn returns_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, board, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let other_post = factory::create_post(db, board.id, user.id).await?;

    let first = factory::create_comment(db, post.id, user.id).await?;
    factory::create_comment(db, other_post.id, user.id).await?;
    let second = factory::create_comment(db, post.id, user.id).await?;
    let third = factory::comment::CommentFactory::new(db, post.id, user.id)
        .parent_id(Some(first.id))
        .build()
        .await?;

    let comments = CommentRepository::new(db).get_by_post_id(post.id).await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
    assert!(ids.windows(2).all(|w| w[0] >= w[1]));

    Ok(())
}

/// Tests listing comments for a post id with no comments.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comments = CommentRepository::new(db).get_by_post_id(999).await?;

    assert!(comments.is_empty());

    Ok(())
}

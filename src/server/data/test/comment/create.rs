use super::*;

/// Tests creating a reply comment.
///
/// Expected: Ok(Comment) keeping the given parent id
#[tokio::test]
async fn creates_reply_with_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _board, post, parent) =
        factory::helpers::create_comment_with_dependencies(db).await?;

    let comment = CommentRepository::new(db)
        .create(NewComment::from_params(
            CreateCommentParams {
                post_id: post.id,
                content: "reply".to_string(),
                nickname: "nick".to_string(),
                parent_id: Some(parent.id),
            },
            user.id,
            Audit::stamp_new(SYSTEM_ACTOR),
        ))
        .await?;

    assert_ne!(comment.id, parent.id);
    assert_eq!(comment.parent_id, Some(parent.id));
    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.user_id, user.id);
    assert_eq!(comment.nickname, "nick");

    Ok(())
}

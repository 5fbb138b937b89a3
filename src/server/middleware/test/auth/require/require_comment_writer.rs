use super::*;

/// Tests the comment writer passing the check.
///
/// Expected: Ok(User) for the writer
#[tokio::test]
async fn grants_access_to_writer() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, _board, _post, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    AuthSession::new(session).set_email(user.email.clone()).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::CommentWriter(comment.id)])
        .await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests the post writer failing the check on someone else's comment.
///
/// Writing the post does not grant control over its comments.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_post_writer_on_foreign_comment() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (post_writer, _board, post) =
        factory::helpers::create_post_with_dependencies(db).await?;
    let commenter = factory::create_user(db).await?;
    let comment = factory::create_comment(db, post.id, commenter.id).await?;
    AuthSession::new(session)
        .set_email(post_writer.email.clone())
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CommentWriter(comment.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

use super::*;

/// Tests the post writer passing the check.
///
/// Expected: Ok(User) for the writer
#[tokio::test]
async fn grants_access_to_writer() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, _board, post) = factory::helpers::create_post_with_dependencies(db).await?;
    AuthSession::new(session).set_email(user.email.clone()).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::PostWriter(post.id)])
        .await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests a writer logged in through the shared session key.
///
/// Expected: Ok(User) for the writer
#[tokio::test]
async fn grants_access_to_logged_in_writer() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let writer = test.login_as("writer@x.com").await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let board = factory::create_board(db).await?;
    let post = factory::create_post(db, board.id, writer.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::PostWriter(post.id)])
        .await?;

    assert_eq!(returned.email, "writer@x.com");

    Ok(())
}

/// Tests another user failing the check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_user, _board, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;
    AuthSession::new(session).set_email(other.email.clone()).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::PostWriter(post.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(email, msg))) => {
            assert_eq!(email, other.email);
            assert!(msg.contains(&format!("post {}", post.id)));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the check against a post that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn not_found_for_missing_post() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_email(user.email.clone()).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::PostWriter(500)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

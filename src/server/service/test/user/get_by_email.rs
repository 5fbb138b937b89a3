use super::*;

/// Tests resolving a user by email.
///
/// Expected: Ok(User) with the stored id
#[tokio::test]
async fn returns_user_for_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user_with_email(db, "u1@x.com").await?;

    let user = UserService::new(db).get_by_email("u1@x.com").await?;

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests resolving an unknown email.
///
/// Expected: Err(AppError::NotFound) naming the email
#[tokio::test]
async fn fails_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_by_email("ghost@x.com").await;

    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("ghost@x.com")),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }

    Ok(())
}

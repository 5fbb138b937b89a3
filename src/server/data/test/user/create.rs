use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores email, name and audit stamps and
/// assigns an id.
///
/// Expected: Ok(User) with the given fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            CreateUserParams {
                email: "writer@example.com".to_string(),
                name: "Writer".to_string(),
            },
            Audit::stamp_new(SYSTEM_ACTOR),
        )
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "writer@example.com");
    assert_eq!(user.name, "Writer");
    assert_eq!(user.audit.created_by, SYSTEM_ACTOR);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err classified as a unique constraint violation when a second
/// user is created with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(
            CreateUserParams {
                email: "taken@example.com".to_string(),
                name: "Second".to_string(),
            },
            Audit::stamp_new(SYSTEM_ACTOR),
        )
        .await;

    match result {
        Err(err) => assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        )),
        Ok(user) => panic!("Expected unique constraint violation, got: {:?}", user),
    }

    Ok(())
}

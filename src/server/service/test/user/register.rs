use super::*;

/// Tests registering a new user.
///
/// Expected: Ok(User) with the requested email and name
#[tokio::test]
async fn registers_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .register(CreateUserParams {
            email: "u1@x.com".to_string(),
            name: "U1".to_string(),
        })
        .await?;

    assert_eq!(user.email, "u1@x.com");
    assert_eq!(user.name, "U1");

    Ok(())
}

/// Tests registering an email that is already taken.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "u1@x.com").await?;

    let result = UserService::new(db)
        .register(CreateUserParams {
            email: "u1@x.com".to_string(),
            name: "Again".to_string(),
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("u1@x.com")),
        other => panic!("Expected BadRequest error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that a refused registration leaves the existing user untouched.
///
/// Expected: the first user keeps its id and name
#[tokio::test]
async fn duplicate_registration_keeps_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let first = service
        .register(CreateUserParams {
            email: "u1@x.com".to_string(),
            name: "First".to_string(),
        })
        .await?;

    let second = service
        .register(CreateUserParams {
            email: "u1@x.com".to_string(),
            name: "Second".to_string(),
        })
        .await;
    assert!(matches!(second, Err(AppError::BadRequest(_))));

    let stored = service.get_by_email("u1@x.com").await?;
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.name, "First");

    Ok(())
}

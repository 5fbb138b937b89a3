use super::*;
use crate::server::{model::board::CreateBoardParams, service::board::BoardService};

/// Tests a board, a post with one image and writer checks end to end.
///
/// U1 creates P1 on B1 with a single image. P1's thumbnail is that image,
/// U1 is the writer, an unregistered U2 is not found and a registered U2 is
/// not the writer.
///
/// Expected: thumbnail "x.png", true for U1, NotFound then false for U2
#[tokio::test]
async fn board_post_and_writer_checks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "u1@x.com").await?;

    let b1 = BoardService::new(db)
        .create(CreateBoardParams {
            title: "B1".to_string(),
        })
        .await?;

    let service = PostService::new(db);
    let p1 = service
        .create(create_params(b1.id, &["x.png"]), "u1@x.com")
        .await?;

    let fetched = service.get_by_id(p1.id).await?;
    assert_eq!(fetched.thumbnail_url.as_deref(), Some("x.png"));

    assert!(service.is_writer("u1@x.com", p1.id).await?);

    assert!(matches!(
        service.is_writer("u2@x.com", p1.id).await,
        Err(AppError::NotFound(_))
    ));

    factory::user::create_user_with_email(db, "u2@x.com").await?;
    assert!(!service.is_writer("u2@x.com", p1.id).await?);

    Ok(())
}

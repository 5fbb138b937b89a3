use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::{comment::CommentService, post::PostService},
};

/// Permissions that can be required of the logged-in user.
pub enum Permission {
    /// The user wrote the post with this id.
    PostWriter(i32),
    /// The user wrote the comment with this id.
    CommentWriter(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission in order.
    ///
    /// An empty permission list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in user holding every permission
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session email no longer resolves
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    /// - `Err(AppError::NotFound)` - The post or comment checked does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(email) = AuthSession::new(self.session).get_email().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::UserNotInDatabase(email).into());
        };

        for permission in permissions {
            match permission {
                Permission::PostWriter(post_id) => {
                    if !PostService::new(self.db).is_writer(&email, *post_id).await? {
                        return Err(AuthError::AccessDenied(
                            email,
                            format!("User is not the writer of post {}", post_id),
                        )
                        .into());
                    }
                }
                Permission::CommentWriter(comment_id) => {
                    if !CommentService::new(self.db)
                        .is_writer(&email, *comment_id)
                        .await?
                    {
                        return Err(AuthError::AccessDenied(
                            email,
                            format!("User is not the writer of comment {}", comment_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

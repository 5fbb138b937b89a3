//! Type-safe session management wrappers.
//!
//! `AuthSession` owns the session keys used for authentication so handlers
//! and guards never touch raw string keys.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_EMAIL: &str = "auth:email";

/// Authentication session management.
///
/// Stores and retrieves the email of the logged-in user.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's email in the session after a successful login.
    ///
    /// # Returns
    /// - `Ok(())` - Email stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_email(&self, email: impl Into<String>) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_EMAIL, email.into())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in user's email.
    ///
    /// # Returns
    /// - `Ok(Some(email))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_email(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_EMAIL).await?)
    }

    /// Checks if a user is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_email().await?.is_some())
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

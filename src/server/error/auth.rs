use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user email is stored in the session.
    ///
    /// The caller has not logged in or the session expired. Results in a
    /// 401 Unauthorized response.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The email stored in the session no longer matches a user.
    ///
    /// Results in a 404 Not Found response.
    #[error("User with email {0} not found")]
    UserNotInDatabase(String),

    /// The logged in user lacks a required permission.
    ///
    /// # Fields
    /// - Email of the user who was denied
    /// - Reason the permission check failed, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "You must be logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

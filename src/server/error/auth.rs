use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login attempt with unknown email or incorrect password")]
    InvalidCredentials,
    #[error("User ID {0:?} attempted a commander-only operation")]
    CommanderRequired(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            // Same message for unknown email and wrong password
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::CommanderRequired(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                error_response(StatusCode::FORBIDDEN, "Forbidden - commander only")
            }
        }
    }
}

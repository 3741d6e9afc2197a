use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0:?} not found")]
    NotFound(i32),
    #[error("Email is already used by another account")]
    EmailTaken,
    #[error("User ID {0:?} attempted to delete their own account")]
    SelfDeletion(i32),
    #[error("Password change requested without the current password")]
    CurrentPasswordRequired,
    #[error("Current password did not match for password change")]
    IncorrectPassword,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Crew member not found"),
            Self::EmailTaken => error_response(StatusCode::BAD_REQUEST, "Email is already in use"),
            Self::SelfDeletion(_) => {
                error_response(StatusCode::BAD_REQUEST, "You cannot delete your own account")
            }
            Self::CurrentPasswordRequired => {
                error_response(StatusCode::BAD_REQUEST, "Current password is required")
            }
            Self::IncorrectPassword => {
                error_response(StatusCode::BAD_REQUEST, "Current password is incorrect")
            }
        }
    }
}

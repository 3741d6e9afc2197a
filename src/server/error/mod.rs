//! Error types for the Starbase server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, configuration, missions, crew accounts). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their definitions.

pub mod auth;
pub mod config;
pub mod mission;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, mission::MissionError, user::UserError},
};

/// Main error type for the Starbase server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (401 unauthorized, 403 forbidden)
/// - Mission errors (not found, already completed, concurrent completion)
/// - Crew account errors (not found, email taken, self deletion, wrong password)
/// - Validation errors for malformed input
/// - External library errors (database, sessions, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Mission lifecycle error.
    #[error(transparent)]
    MissionError(#[from] MissionError),
    /// Crew account error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Malformed input such as a missing required field.
    #[error("{0}")]
    Validation(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Starbase's code.
    #[error("Internal error with Starbase's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing or verification failure.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// Listener or other I/O failure during startup.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, already completed missions, account rule violations
/// - 401 Unauthorized - No valid session or invalid credentials
/// - 403 Forbidden - Insufficient role
/// - 404 Not Found - Missing missions, progress records or crew members
/// - 409 Conflict - Mission completed concurrently by another request
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::MissionError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::Validation(message) => {
                tracing::debug!("Validation error: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

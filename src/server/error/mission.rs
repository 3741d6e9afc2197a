//! Mission lifecycle error types.
//!
//! These errors are client-visible outcomes of starting, completing or retrying a mission.
//! None of them are retried by the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum MissionError {
    /// No mission with this ID exists.
    #[error("Mission ID {0:?} not found")]
    NotFound(i32),
    /// The user has no progress record for the mission.
    #[error("No progress record for user ID {user_id:?} on mission ID {mission_id:?}")]
    ProgressNotFound { user_id: i32, mission_id: i32 },
    /// The mission is globally locked by an earlier completion.
    #[error("Mission ID {0:?} has already been completed")]
    AlreadyCompleted(i32),
    /// The requester holds the completion of this mission.
    #[error("Mission ID {0:?} has already been completed by the requester")]
    CompletedByRequester(i32),
    /// The mission was locked by a concurrent completion between the availability check
    /// and the lock write.
    #[error("Mission ID {0:?} was completed by a concurrent request")]
    Conflict(i32),
}

impl IntoResponse for MissionError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Mission not found"),
            Self::ProgressNotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, "Mission progress not found")
            }
            Self::AlreadyCompleted(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Mission has already been completed by another crew member",
            ),
            Self::CompletedByRequester(_) => error_response(
                StatusCode::BAD_REQUEST,
                "You have already completed this mission",
            ),
            Self::Conflict(_) => error_response(
                StatusCode::CONFLICT,
                "Mission was just completed by another crew member",
            ),
        }
    }
}

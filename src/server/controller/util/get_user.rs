use tower_sessions::Session;

use crate::{
    model::user::{RoleDto, UserDto},
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    // Get user from session
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    // Get user from database
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Retrieves the signed-in user, requiring the commander role
///
/// # Returns
/// - `Ok(UserDto)`: Signed-in user is a commander
/// - `Err(Error::AuthError(AuthError::CommanderRequired))`: Signed-in user has a lower role
/// - Any error from [`get_user_from_session`]
pub async fn require_commander(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;

    match user.role {
        RoleDto::Commander => Ok(user),
        RoleDto::Regular | RoleDto::Pilot => {
            Err(Error::AuthError(AuthError::CommanderRequired(user.id)))
        }
    }
}

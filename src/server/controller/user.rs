use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, SetPasswordDto, UpdateProfileDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::get_user::{get_user_from_session, require_commander},
        error::{user::UserError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "crew";

/// Get the signed-in crew member's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Own profile", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Update the signed-in crew member's name or password
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Current password missing or incorrect, or invalid field", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let profile = UserService::new(&state.db)
        .update_profile(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// List the crew ordered by XP, highest first
#[utoipa::path(
    get,
    path = "/api/crew",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Crew leaderboard", body = Vec<UserDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_crew(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let crew = UserService::new(&state.db).get_crew().await?;

    Ok((StatusCode::OK, Json(crew)))
}

/// Get a crew member by ID
#[utoipa::path(
    get,
    path = "/api/crew/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    responses(
        (status = 200, description = "Crew member", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_crew_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let user = UserService::new(&state.db)
        .get_user(id)
        .await?
        .ok_or(UserError::NotFound(id))?;

    Ok((StatusCode::OK, Json(user)))
}

/// Create a crew member with any role (commander only)
#[utoipa::path(
    post,
    path = "/api/crew",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Crew member created", body = UserDto),
        (status = 400, description = "Invalid field or email already in use", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_crew_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    require_commander(&state, &session).await?;

    let user = UserService::new(&state.db).create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a crew member's account (commander only)
#[utoipa::path(
    put,
    path = "/api/crew/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Crew member updated", body = UserDto),
        (status = 400, description = "Invalid field or email already in use", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_crew_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    require_commander(&state, &session).await?;

    let user = UserService::new(&state.db).update_user(id, payload).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a crew member and their mission progress (commander only)
#[utoipa::path(
    delete,
    path = "/api/crew/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    responses(
        (status = 200, description = "Crew member deleted", body = MessageDto),
        (status = 400, description = "Commander attempted to delete their own account", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_crew_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let commander = require_commander(&state, &session).await?;

    UserService::new(&state.db)
        .delete_user(commander.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Crew member deleted".to_string(),
        }),
    ))
}

/// Set a crew member's password without their current password (commander only)
#[utoipa::path(
    put,
    path = "/api/crew/{id}/password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Crew member ID")),
    request_body = SetPasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Password too short", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 404, description = "Crew member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_crew_password(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    require_commander(&state, &session).await?;

    UserService::new(&state.db).set_password(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated".to_string(),
        }),
    ))
}

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
        mission::{
            CompletionDto, CreateMissionDto, CrewMissionDto, MissionDetailDto, MissionDto,
            ProgressDto, ResetSummaryDto, StartMissionDto, UpdateMissionDto,
        },
    },
    server::{
        controller::util::get_user::{get_user_from_session, require_commander},
        error::Error,
        model::app::AppState,
        service::mission::MissionService,
    },
};

pub static MISSION_TAG: &str = "mission";

/// List active missions with the signed-in crew member's status for each
#[utoipa::path(
    get,
    path = "/api/missions",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Active missions, newest first", body = Vec<CrewMissionDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_missions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let missions = MissionService::new(&state.db).list_for_user(user.id).await?;

    Ok((StatusCode::OK, Json(missions)))
}

/// Get a mission with its progress record count
#[utoipa::path(
    get,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(("id" = i32, Path, description = "Mission ID")),
    responses(
        (status = 200, description = "Mission detail", body = MissionDetailDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let mission = MissionService::new(&state.db).get_mission(id).await?;

    Ok((StatusCode::OK, Json(mission)))
}

/// Start a mission
///
/// Starting a mission that is already in progress returns the existing record with
/// `already_started` set.
#[utoipa::path(
    post,
    path = "/api/missions/{id}/start",
    tag = MISSION_TAG,
    params(("id" = i32, Path, description = "Mission ID")),
    responses(
        (status = 200, description = "Mission in progress", body = StartMissionDto),
        (status = 400, description = "Mission already completed by the caller or another crew member", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 409, description = "Concurrent start for the same mission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_mission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let started = MissionService::new(&state.db).start(user.id, id).await?;

    Ok((StatusCode::OK, Json(started)))
}

/// Complete a mission, locking it and rewarding the entire crew
#[utoipa::path(
    post,
    path = "/api/missions/{id}/complete",
    tag = MISSION_TAG,
    params(("id" = i32, Path, description = "Mission ID")),
    responses(
        (status = 200, description = "Mission completed and crew rewarded", body = CompletionDto),
        (status = 400, description = "Mission already completed by the caller or another crew member", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 409, description = "Mission completed concurrently by another crew member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_mission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let completion = MissionService::new(&state.db).complete(user.id, id).await?;

    Ok((StatusCode::OK, Json(completion)))
}

/// Reset the signed-in crew member's progress on a mission
#[utoipa::path(
    post,
    path = "/api/missions/{id}/retry",
    tag = MISSION_TAG,
    params(("id" = i32, Path, description = "Mission ID")),
    responses(
        (status = 200, description = "Progress reset to in progress", body = ProgressDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Mission was never started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn retry_mission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let progress = MissionService::new(&state.db).retry(user.id, id).await?;

    Ok((StatusCode::OK, Json(progress)))
}

/// Create a mission (commander only)
#[utoipa::path(
    post,
    path = "/api/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    responses(
        (status = 201, description = "Mission created", body = MissionDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMissionDto>,
) -> Result<impl IntoResponse, Error> {
    require_commander(&state, &session).await?;

    let mission = MissionService::new(&state.db).create_mission(payload).await?;

    Ok((StatusCode::CREATED, Json(mission)))
}

/// Update a mission (commander only)
#[utoipa::path(
    put,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(("id" = i32, Path, description = "Mission ID")),
    request_body = UpdateMissionDto,
    responses(
        (status = 200, description = "Mission updated", body = MissionDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMissionDto>,
) -> Result<impl IntoResponse, Error> {
    require_commander(&state, &session).await?;

    let mission = MissionService::new(&state.db)
        .update_mission(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(mission)))
}

/// Delete a mission and all progress on it (commander only)
#[utoipa::path(
    delete,
    path = "/api/missions/{id}",
    tag = MISSION_TAG,
    params(("id" = i32, Path, description = "Mission ID")),
    responses(
        (status = 200, description = "Mission deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 404, description = "Mission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mission(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_commander(&state, &session).await?;

    MissionService::new(&state.db).delete_mission(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Mission deleted".to_string(),
        }),
    ))
}

/// Reset all mission progress, unlock every mission and zero the crew's XP (commander only)
#[utoipa::path(
    post,
    path = "/api/missions/reset",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Station reset", body = ResetSummaryDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Commander role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_missions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let commander = require_commander(&state, &session).await?;

    let summary = MissionService::new(&state.db).reset_all().await?;

    tracing::info!(user_id = %commander.id, "Missions reset by commander");

    Ok((StatusCode::OK, Json(summary)))
}

use chrono::NaiveDateTime;
use entity::{station_mission::Difficulty, station_user_mission::MissionStatus};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyDto {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl From<Difficulty> for DifficultyDto {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::Easy,
            Difficulty::Medium => Self::Medium,
            Difficulty::Hard => Self::Hard,
            Difficulty::Extreme => Self::Extreme,
        }
    }
}

impl From<DifficultyDto> for Difficulty {
    fn from(difficulty: DifficultyDto) -> Self {
        match difficulty {
            DifficultyDto::Easy => Self::Easy,
            DifficultyDto::Medium => Self::Medium,
            DifficultyDto::Hard => Self::Hard,
            DifficultyDto::Extreme => Self::Extreme,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatusDto {
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

impl From<MissionStatus> for ProgressStatusDto {
    fn from(status: MissionStatus) -> Self {
        match status {
            MissionStatus::NotStarted => Self::NotStarted,
            MissionStatus::InProgress => Self::InProgress,
            MissionStatus::Completed => Self::Completed,
            MissionStatus::Failed => Self::Failed,
        }
    }
}

/// Status of a mission from the point of view of one crew member
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CrewMissionStatusDto {
    Available,
    InProgress,
    Completed,
    Failed,
}

impl From<Option<MissionStatus>> for CrewMissionStatusDto {
    fn from(status: Option<MissionStatus>) -> Self {
        match status {
            None | Some(MissionStatus::NotStarted) => Self::Available,
            Some(MissionStatus::InProgress) => Self::InProgress,
            Some(MissionStatus::Completed) => Self::Completed,
            Some(MissionStatus::Failed) => Self::Failed,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MissionDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub difficulty: DifficultyDto,
    pub xp_reward: i64,
    /// Informational, not enforced when starting or completing
    pub min_level: i32,
    pub is_active: bool,
    pub is_completed: bool,
    pub completed_at: Option<NaiveDateTime>,
    pub completed_by: Option<i32>,
    pub created_at: NaiveDateTime,
}

impl From<entity::station_mission::Model> for MissionDto {
    fn from(mission: entity::station_mission::Model) -> Self {
        Self {
            id: mission.id,
            title: mission.title,
            description: mission.description,
            location: mission.location,
            duration: mission.duration,
            difficulty: mission.difficulty.into(),
            xp_reward: mission.xp_reward,
            min_level: mission.min_level,
            is_active: mission.is_active,
            is_completed: mission.is_completed,
            completed_at: mission.completed_at,
            completed_by: mission.completed_by,
            created_at: mission.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MissionDetailDto {
    #[serde(flatten)]
    pub mission: MissionDto,
    /// Number of crew members with a progress record on this mission
    pub progress_count: u64,
}

/// A mission in the catalogue along with the requesting crew member's progress.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CrewMissionDto {
    #[serde(flatten)]
    pub mission: MissionDto,
    pub status: CrewMissionStatusDto,
    pub progress_id: Option<i32>,
    pub xp_earned: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProgressDto {
    pub id: i32,
    pub user_id: i32,
    pub mission_id: i32,
    pub status: ProgressStatusDto,
    pub started_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    pub xp_earned: i64,
}

impl From<entity::station_user_mission::Model> for ProgressDto {
    fn from(progress: entity::station_user_mission::Model) -> Self {
        Self {
            id: progress.id,
            user_id: progress.user_id,
            mission_id: progress.mission_id,
            status: progress.status.into(),
            started_at: progress.started_at,
            completed_at: progress.completed_at,
            xp_earned: progress.xp_earned,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StartMissionDto {
    pub progress: ProgressDto,
    /// True when the crew member already had this mission in progress
    pub already_started: bool,
}

/// Summary of a mission completion and the crew-wide reward it triggered
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompletionDto {
    pub mission_id: i32,
    pub mission_title: String,
    pub xp_earned: i64,
    /// Display name of the crew member who completed the mission
    pub completed_by: String,
    pub all_crew_rewarded: bool,
    /// Number of crew members credited with `xp_earned`
    pub crew_rewarded: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResetSummaryDto {
    pub progress_removed: u64,
    pub missions_unlocked: u64,
    pub users_reset: u64,
}

/// New mission definition.
///
/// Difficulty defaults to medium, reward to 100 XP and minimum level to 1.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMissionDto {
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
    pub difficulty: Option<DifficultyDto>,
    pub xp_reward: Option<i64>,
    pub min_level: Option<i32>,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateMissionDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<DifficultyDto>,
    pub xp_reward: Option<i64>,
    pub min_level: Option<i32>,
    pub is_active: Option<bool>,
}

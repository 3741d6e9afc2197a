use chrono::NaiveDateTime;
use entity::station_user::Role;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Regular,
    Pilot,
    Commander,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::Regular => Self::Regular,
            Role::Pilot => Self::Pilot,
            Role::Commander => Self::Commander,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::Regular => Self::Regular,
            RoleDto::Pilot => Self::Pilot,
            RoleDto::Commander => Self::Commander,
        }
    }
}

/// A crew member as shown to other crew members. The password hash is never included.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: RoleDto,
    pub xp: i64,
    pub level: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::station_user::Model> for UserDto {
    fn from(user: entity::station_user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.into(),
            xp: user.xp,
            level: user.level,
            created_at: user.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Changes a crew member may make to their own profile.
///
/// Changing the password requires `current_password`.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Account creation by a commander. Role defaults to regular.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<RoleDto>,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<RoleDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SetPasswordDto {
    pub new_password: String,
}

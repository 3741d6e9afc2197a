//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to reach into the `entity` crate.

/// Type alias for a crew member database model.
///
/// # Fields (from `entity::station_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique login email
/// - `name` - Display name
/// - `password_hash` - bcrypt hash of the user's password
/// - `role` - Regular, Pilot or Commander
/// - `xp` - Accumulated experience points, never negative
/// - `level` - Always `floor(xp / 500) + 1`
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::station_user::Model;

/// Type alias for a mission database model.
///
/// A mission with `is_completed` set is globally locked: no further completion can
/// succeed until the station is reset.
pub type MissionModel = entity::station_mission::Model;

/// Type alias for a per-user mission progress record.
///
/// At most one record exists per (user, mission) pair.
pub type UserMissionModel = entity::station_user_mission::Model;

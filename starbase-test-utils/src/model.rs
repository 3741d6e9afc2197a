//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main starbase crate to keep test signatures short.

/// Type alias for crew member database model.
pub type UserModel = entity::station_user::Model;

/// Type alias for mission database model.
pub type MissionModel = entity::station_mission::Model;

/// Type alias for per-user mission progress database model.
pub type UserMissionModel = entity::station_user_mission::Model;

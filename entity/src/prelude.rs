pub use super::station_mission::Entity as StationMission;
pub use super::station_user::Entity as StationUser;
pub use super::station_user_mission::Entity as StationUserMission;

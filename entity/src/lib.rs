//! SeaORM entities for the Starbase crew portal.

pub mod prelude;

pub mod station_mission;
pub mod station_user;
pub mod station_user_mission;

pub use sea_orm_migration::prelude::*;

mod m20251201_000001_station_user;
mod m20251201_000002_station_mission;
mod m20251201_000003_station_user_mission;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_station_user::Migration),
            Box::new(m20251201_000002_station_mission::Migration),
            Box::new(m20251201_000003_station_user_mission::Migration),
        ]
    }
}

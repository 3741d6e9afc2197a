//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::station_user::Role;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// crew/mission fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_station_tables: bool,

    // Database fixtures to insert
    users: Vec<(Role, i64)>, // (role, xp)
    missions: Vec<i64>,      // xp_reward
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_station_tables: false,
            users: Vec::new(),
            missions: Vec::new(),
        }
    }

    /// Add the user, mission and mission progress tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_station_tables(mut self) -> Self {
        self.include_station_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a crew member with the provided role and starting XP.
    ///
    /// The user's level is derived from `xp`. Created users are available on
    /// `TestContext::users` in the order they were queued.
    pub fn with_user(mut self, role: Role, xp: i64) -> Self {
        self.users.push((role, xp));
        self
    }

    /// Insert an active, not yet completed mission with the provided reward.
    ///
    /// Created missions are available on `TestContext::missions` in the order they were queued.
    pub fn with_mission(mut self, xp_reward: i64) -> Self {
        self.missions.push(xp_reward);
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (station tables if specified, then custom tables)
    /// 2. Inserts users, then missions
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_station_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::StationUser),
                schema.create_table_from_entity(entity::prelude::StationMission),
                schema.create_table_from_entity(entity::prelude::StationUserMission),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (role, xp) in self.users {
            let user = setup.user().insert_user(role, xp).await?;
            setup.users.push(user);
        }

        for xp_reward in self.missions {
            let mission = setup.mission().insert_mission(xp_reward).await?;
            setup.missions.push(mission);
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

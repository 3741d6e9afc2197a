//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database and a session backed by an in-memory store.

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    error::TestError,
    model::{MissionModel, UserModel},
};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - Database connection
/// - Session for authentication flows
/// - Users and missions queued on the builder, in insertion order
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_station_tables().build().await?;
///
/// let user = test.user().insert_user(Role::Regular, 0).await?;
/// let mission = test.mission().insert_mission(200).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
    /// Users created by `TestBuilder::with_user`
    pub users: Vec<UserModel>,
    /// Missions created by `TestBuilder::with_mission`
    pub missions: Vec<MissionModel>,

    /// Counter used to generate unique fixture emails
    pub(crate) next_user: usize,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main starbase crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context with an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            users: Vec::new(),
            missions: Vec::new(),
            next_user: 0,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

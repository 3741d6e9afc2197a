//! Shared helpers for integration tests.

#[cfg(feature = "postgres-test")]
pub mod postgres;

use starbase::server::model::{app::AppState, session::user::SessionUserId};
use starbase_test_utils::TestContext;

/// Extension trait for building handler inputs from a `TestContext`
pub trait TestContextExt {
    /// Application state backed by the test database
    fn app_state(&self) -> AppState;

    /// Store `user_id` in the test session as the signed-in crew member
    async fn sign_in(&self, user_id: i32);
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }

    async fn sign_in(&self, user_id: i32) {
        SessionUserId::insert(&self.session, user_id)
            .await
            .expect("Failed to insert user ID into session");
    }
}

//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations and are generic over
//! `ConnectionTrait`, so the same repository runs against a pooled connection or inside a
//! `DatabaseTransaction` opened by a service.

pub mod mission;
pub mod user;
pub mod user_mission;

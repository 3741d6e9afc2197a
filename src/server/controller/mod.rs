//! HTTP controller endpoints for the Starbase web API.
//!
//! This module contains Axum handlers for authentication, crew management and missions.
//! Controllers resolve the signed-in crew member from the session, enforce roles, call into
//! services and return JSON responses. They use utoipa for OpenAPI documentation.

pub mod auth;
pub mod mission;
pub mod user;
pub mod util;

//! Utility functions for controller request handling.
//!
//! This module provides helpers used across controllers to resolve the signed-in crew
//! member from their session and to enforce commander-only endpoints.

pub mod get_user;

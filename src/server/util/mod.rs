//! Utility functions and helpers for server operations.
//!
//! This module provides the leveling formula shared by the reward engine and account
//! management, password hashing helpers, and request field validation.

pub mod input;
pub mod level;
pub mod password;

//! Test fixture modules for database record creation.
//!
//! - `user` - crew member records with hashed fixture passwords
//! - `mission` - mission records and per-user mission progress records

pub mod mission;
pub mod user;

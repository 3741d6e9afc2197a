//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic and coordinates
//! repositories inside database transactions. Services cover authentication, crew account
//! management and the mission lifecycle including the crew-wide reward engine.

pub mod auth;
pub mod mission;
pub mod user;

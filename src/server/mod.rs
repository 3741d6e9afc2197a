//! Server application core modules.
//!
//! This module contains all server-side functionality for Starbase, including HTTP routing,
//! session authentication, database access, and the mission reward engine that turns a single
//! mission completion into an XP reward for the whole crew.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

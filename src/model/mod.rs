//! Request and response bodies for the HTTP API.

pub mod api;
pub mod mission;
pub mod user;

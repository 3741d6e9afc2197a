//! Starbase: a crew portal for a space station where every completed mission
//! rewards the whole crew.

pub mod model;
pub mod server;
